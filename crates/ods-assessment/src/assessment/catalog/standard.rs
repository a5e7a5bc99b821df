use super::super::domain::{
    AnswerOption, Dimension, DimensionId, MaturityTier, Question, TierBand,
};
use super::{CatalogDefinition, RecommendationTable};
use std::collections::BTreeMap;

pub(super) fn definition() -> CatalogDefinition {
    CatalogDefinition {
        dimensions: dimensions(),
        questions: questions(),
        options: answer_options(),
        tiers: tier_bands().to_vec(),
        recommendations: recommendations(),
    }
}

pub(super) fn tier_bands() -> [TierBand; 4] {
    [
        band(MaturityTier::Inicial, 0, 25),
        band(MaturityTier::Proceso, 26, 50),
        band(MaturityTier::Avanzado, 51, 80),
        band(MaturityTier::Lider, 81, 100),
    ]
}

fn band(tier: MaturityTier, min: u8, max: u8) -> TierBand {
    TierBand {
        tier,
        label: tier.label().to_string(),
        min,
        max,
    }
}

fn dimensions() -> Vec<Dimension> {
    vec![
        dimension(
            DimensionId::Gestion,
            "GESTIÓN",
            "Estrategia, gobernanza, ética, riesgos, compras y buen gobierno para generar confianza y estabilidad.",
            "bg-yellow-500",
        ),
        dimension(
            DimensionId::Personas,
            "PERSONAS",
            "Empleo, condiciones laborales, igualdad, salud y seguridad, bienestar y formación.",
            "bg-orange-500",
        ),
        dimension(
            DimensionId::Planeta,
            "PLANETA",
            "Gestión de impactos ambientales: energía, agua, emisiones, residuos, economía circular y movilidad.",
            "bg-teal-600",
        ),
        dimension(
            DimensionId::Prosperidad,
            "PROSPERIDAD",
            "Viabilidad económica, innovación, digitalización, relación con clientes y proveedores, e impacto local.",
            "bg-blue-600",
        ),
        dimension(
            DimensionId::Alianzas,
            "ALIANZAS",
            "Colaboración con otras entidades, asociaciones, sector público y social alineadas con los ODS.",
            "bg-indigo-600",
        ),
    ]
}

fn dimension(id: DimensionId, title: &str, description: &str, color: &str) -> Dimension {
    Dimension {
        id,
        title: title.to_string(),
        description: description.to_string(),
        color: color.to_string(),
    }
}

fn answer_options() -> Vec<AnswerOption> {
    vec![
        option(0.0, "0. No iniciado", "No existe / no se hace."),
        option(1.0, "1. En proceso", "En diseño, piloto o acciones puntuales."),
        option(2.0, "2. Implantado", "Se aplica de forma habitual."),
        option(
            3.0,
            "3. Consolidado",
            "Se aplica de forma sistemática y se hace seguimiento para mejorar.",
        ),
        option(0.1, "No lo sé", "No dispongo de información."),
        option(-1.0, "No aplica", "A mi empresa/actividad."),
    ]
}

fn option(value: f64, label: &str, description: &str) -> AnswerOption {
    AnswerOption {
        value,
        label: label.to_string(),
        description: description.to_string(),
    }
}

fn question(id: &str, dimension: DimensionId, text: &str) -> Question {
    Question {
        id: id.to_string(),
        dimension,
        text: text.to_string(),
    }
}

fn questions() -> Vec<Question> {
    vec![
        question("g1", DimensionId::Gestion, "Estrategia/plan de sostenibilidad: en su empresa existe una hoja de ruta (objetivos, acciones y responsables), aunque sea sencilla."),
        question("g2", DimensionId::Gestion, "Objetivos y seguimiento: en su empresa se definen objetivos de sostenibilidad y se revisan de forma periódica."),
        question("g3", DimensionId::Gestion, "ODS prioritarios: en su empresa están identificados los ODS más relevantes y se han traducido en acciones o iniciativas concretas."),
        question("g4", DimensionId::Gestion, "Código ético e integridad: en su empresa existe un código ético o políticas de integridad (incluye prevención de corrupción) y mecanismos para aplicarlo."),
        question("g5", DimensionId::Gestion, "Políticas sociales básicas: en su empresa existen políticas o medidas básicas en igualdad/no discriminación y condiciones laborales."),
        question("g6", DimensionId::Gestion, "Política ambiental básica: en su empresa existen compromisos o políticas ambientales (energía, residuos, compras, etc.)."),
        question("g7", DimensionId::Gestion, "Indicadores y responsables: en su empresa se hace seguimiento con indicadores de sostenibilidad y hay responsables definidos."),
        question("g8", DimensionId::Gestion, "Comunicación/reporte: en su empresa se comunican los avances en sostenibilidad (internamente y/o a públicos externos)."),
        question("g9", DimensionId::Gestion, "Compras sostenibles: en su empresa se aplican criterios de sostenibilidad en compras y contratación (requisitos, cláusulas, certificaciones o equivalentes)."),
        question("g10", DimensionId::Gestion, "Gestión de proveedores: en su empresa se evalúa a proveedores críticos (por riesgo/criticidad) y se promueven mejoras cuando procede."),
        question("g11", DimensionId::Gestion, "Riesgos y cumplimiento: en su empresa se identifican requisitos y riesgos relevantes en sostenibilidad y se gestionan."),
        question("g12", DimensionId::Gestion, "Grupos de interés: en su empresa existen canales para consultas/quejas/sugerencias (clientes, plantilla, proveedores, comunidad) y se responde."),
        question("p1", DimensionId::Personas, "Selección y contratación: en su empresa los procesos de selección son transparentes y con criterios objetivos (perfiles definidos y registros)."),
        question("p2", DimensionId::Personas, "Estabilidad del empleo: en su empresa se hace seguimiento de rotación/temporalidad y se aplican acciones de mejora."),
        question("p3", DimensionId::Personas, "Jornada y horas extra: en su empresa se registra la jornada y se gestionan las horas extra de forma planificada y conforme a normativa."),
        question("p4", DimensionId::Personas, "Conciliación y flexibilidad: en su empresa existen medidas de conciliación/flexibilidad y criterios para aplicarlas de forma equitativa."),
        question("p5", DimensionId::Personas, "Formación y desarrollo: en su empresa se planifica la formación (plan anual o acciones periódicas) y se revisan necesidades."),
        question("p6", DimensionId::Personas, "Desempeño y feedback: en su empresa se evalúa el desempeño de forma periódica (objetivos, entrevistas y/o feedback)."),
        question("p7", DimensionId::Personas, "Comunicación interna y participación: en su empresa hay canales para informar, recoger propuestas y dar respuesta."),
        question("p8", DimensionId::Personas, "Igualdad y no discriminación: en su empresa existe una política o medidas para prevenir discriminación y promover igualdad."),
        question("p9", DimensionId::Personas, "Prevención del acoso: en su empresa existe protocolo y canal confidencial para prevenir y actuar ante acoso (laboral/sexual) y se conoce internamente."),
        question("p10", DimensionId::Personas, "Retribución y equidad salarial: en su empresa hay criterios retributivos definidos y se revisa la equidad (incluida brecha salarial cuando procede)."),
        question("p11", DimensionId::Personas, "Inclusión y accesibilidad: en su empresa se aplican adaptaciones razonables y medidas de accesibilidad cuando es necesario."),
        question("p12", DimensionId::Personas, "Subcontratas/ETT: en su empresa se exigen condiciones laborales mínimas y cumplimiento a empresas subcontratadas o ETT, cuando corresponde."),
        question("p13", DimensionId::Personas, "Gestión de PRL: en su empresa están definidos roles y responsabilidades (responsable interno y/o servicio de prevención) y se conocen."),
        question("p14", DimensionId::Personas, "Evaluación de riesgos: en su empresa la evaluación de riesgos está actualizada y existe un plan preventivo asociado."),
        question("p15", DimensionId::Personas, "Formación en PRL: en su empresa se realiza formación inicial y periódica, especialmente en puestos con mayor riesgo."),
        question("p16", DimensionId::Personas, "Incidentes y accidentes: en su empresa se registran, investigan causas y se aplican medidas correctoras cuando ocurre un incidente."),
        question("p17", DimensionId::Personas, "EPIs y procedimientos: en su empresa hay EPIs disponibles y procedimientos definidos, y se verifica su uso cuando corresponde."),
        question("p18", DimensionId::Personas, "Vigilancia de la salud: en su empresa se ofrece/gestiona conforme a normativa y se utiliza para mejorar la prevención."),
        question("p19", DimensionId::Personas, "Riesgos psicosociales: en su empresa se evalúan factores psicosociales (estrés, carga, etc.) y se aplican acciones de mejora."),
        question("p20", DimensionId::Personas, "Bienestar y clima: en su empresa se mide clima/bienestar (encuesta u otros) y se ejecutan acciones a partir de resultados."),
        question("p21", DimensionId::Personas, "Desconexión digital: en su empresa existen pautas o medidas para respetar tiempos de descanso y desconexión."),
        question("p22", DimensionId::Personas, "Canal interno de quejas/sugerencias: en su empresa existe canal y un procedimiento de respuesta (plazos, responsables y seguimiento)."),
        question("p23", DimensionId::Personas, "Mejora continua en SST/bienestar: en su empresa existe un plan de mejora y se revisa periódicamente."),
        question("pl1", DimensionId::Planeta, "Energía: en su empresa se registra y revisa el consumo energético (facturas, contadores o registros internos)."),
        question("pl2", DimensionId::Planeta, "Eficiencia energética: en su empresa se aplican medidas para reducir el consumo (equipos, iluminación, climatización y hábitos)."),
        question("pl3", DimensionId::Planeta, "Electricidad renovable: en su empresa se utiliza electricidad de origen renovable (autoconsumo y/o contrato con garantías)."),
        question("pl4", DimensionId::Planeta, "Agua: en su empresa se registra y revisa el consumo de agua (facturas, contadores o registros internos)."),
        question("pl5", DimensionId::Planeta, "Eficiencia hídrica: en su empresa se aplican medidas para reducir el consumo de agua (fugas, equipos y/o procesos)."),
        question("pl6", DimensionId::Planeta, "Vertidos/aguas residuales: en su empresa se gestionan autorizaciones, controles y buenas prácticas cuando corresponde."),
        question("pl7", DimensionId::Planeta, "Huella de carbono: en su empresa se estiman o calculan emisiones (al menos energía y combustibles) y se documenta el método."),
        question("pl8", DimensionId::Planeta, "Reducción de emisiones: en su empresa existen medidas o un plan para reducir emisiones y mejorar el desempeño climático."),
        question("pl9", DimensionId::Planeta, "Movilidad: en su empresa se promueve movilidad sostenible (flota, rutas, viajes, teletrabajo, desplazamientos) cuando corresponde."),
        question("pl10", DimensionId::Planeta, "Refrigerantes y gases: en su empresa se controlan equipos, mantenimiento y fugas de refrigerantes conforme a normativa."),
        question("pl11", DimensionId::Planeta, "Riesgos climáticos: en su empresa se identifican riesgos (olas de calor, suministro, inundaciones, etc.) y medidas básicas de adaptación."),
        question("pl12", DimensionId::Planeta, "Cumplimiento ambiental: en su empresa se identifican requisitos aplicables (licencias/obligaciones) y se verifica su cumplimiento periódicamente."),
        question("pl13", DimensionId::Planeta, "Residuos: en su empresa se separan y gestionan residuos con gestores/autorizaciones cuando corresponde."),
        question("pl14", DimensionId::Planeta, "Residuos: en su empresa se registran cantidades o evidencias de gestión (contratos, albaranes, certificados) cuando es posible."),
        question("pl15", DimensionId::Planeta, "Residuos peligrosos: en su empresa existe segregación, almacenamiento seguro y gestión conforme a normativa cuando corresponde."),
        question("pl16", DimensionId::Planeta, "Prevención de residuos: en su empresa se aplican medidas para evitar residuos en origen (reducción, reutilización y compras)."),
        question("pl17", DimensionId::Planeta, "Reutilización y reciclaje: en su empresa se favorecen la reutilización y el reciclaje (interno y/o con gestores) y se revisan resultados cuando es posible."),
        question("pl18", DimensionId::Planeta, "RAEE y consumibles: en su empresa se gestionan correctamente equipos eléctricos/electrónicos, tóner, pilas y similares."),
        question("pl19", DimensionId::Planeta, "Plásticos de un solo uso: en su empresa se reducen o sustituyen plásticos de un solo uso en operaciones y eventos."),
        question("pl20", DimensionId::Planeta, "Papel y digitalización: en su empresa se reduce la impresión y se promueve documentación digital y buenas prácticas de archivo."),
        question("pl21", DimensionId::Planeta, "Compras con criterios ambientales: en su empresa se incorporan criterios ambientales en compras (materiales, proveedores, certificaciones o equivalentes)."),
        question("pl22", DimensionId::Planeta, "Envases y embalajes: en su empresa se reducen, reutilizan o mejoran embalajes y se priorizan opciones más sostenibles cuando corresponde."),
        question("pl23", DimensionId::Planeta, "Producto/servicio: en su empresa se consideran mejoras ambientales en diseño o prestación (durabilidad, eficiencia, circularidad) cuando corresponde."),
        question("pl24", DimensionId::Planeta, "Sensibilización ambiental interna: en su empresa se realizan acciones de comunicación o formación para implicar a la plantilla."),
        question("pr1", DimensionId::Prosperidad, "Viabilidad económica: en su empresa se realiza seguimiento de resultados, costes y liquidez del negocio."),
        question("pr2", DimensionId::Prosperidad, "Decisiones basadas en datos: en su empresa se utilizan datos económico-financieros para planificar y tomar decisiones relevantes."),
        question("pr3", DimensionId::Prosperidad, "Crecimiento responsable: en su empresa, al planificar crecimiento/inversiones, se consideran impactos en personas y entorno."),
        question("pr4", DimensionId::Prosperidad, "Innovación en productos/servicios: en su empresa existe un proceso para identificar e introducir mejoras/innovaciones en la oferta."),
        question("pr5", DimensionId::Prosperidad, "Innovación en procesos: en su empresa existe un proceso de mejora continua para ganar eficiencia y calidad."),
        question("pr6", DimensionId::Prosperidad, "Digitalización: en su empresa se usan herramientas digitales para mejorar gestión, productividad o relación con clientes (con enfoque planificado)."),
        question("pr7", DimensionId::Prosperidad, "Clientes: en su empresa existen prácticas de transparencia, calidad, atención responsable y gestión de reclamaciones."),
        question("pr8", DimensionId::Prosperidad, "Proveedores locales: en su empresa se prioriza o fomenta la contratación de proveedores locales cuando es viable."),
        question("pr9", DimensionId::Prosperidad, "Pago responsable: en su empresa se respetan plazos de pago y prácticas comerciales justas."),
        question("pr10", DimensionId::Prosperidad, "Impacto local: en su empresa se identifica y/o hace seguimiento del impacto económico en el entorno local (empleo, compras, etc.)."),
        question("pr11", DimensionId::Prosperidad, "Redes y proyectos: en su empresa se participa activamente en redes, asociaciones o proyectos colaborativos."),
        question("a1", DimensionId::Alianzas, "Colaboración empresarial: su empresa participa en proyectos o iniciativas conjuntas con otras empresas."),
        question("a2", DimensionId::Alianzas, "Asociaciones y clústeres: su empresa participa activamente en asociaciones, clústeres o redes empresariales."),
        question("a3", DimensionId::Alianzas, "Administraciones públicas: su empresa colabora con administraciones en programas, proyectos o iniciativas."),
        question("a4", DimensionId::Alianzas, "Entidades sociales: su empresa colabora con ONG, fundaciones u organizaciones sociales."),
        question("a5", DimensionId::Alianzas, "Centros educativos/tecnológicos: su empresa colabora con centros de formación, universidades o centros tecnológicos."),
        question("a6", DimensionId::Alianzas, "Proyectos vinculados a ODS: su empresa participa en proyectos colaborativos alineados con ODS prioritarios."),
        question("a7", DimensionId::Alianzas, "Patrocinios y apoyos: su empresa apoya iniciativas externas (culturales, sociales, ambientales, deportivas, etc.)."),
        question("a8", DimensionId::Alianzas, "Voluntariado corporativo: su empresa impulsa o facilita la participación del personal en acciones de voluntariado cuando corresponde."),
        question("a9", DimensionId::Alianzas, "Compras con impacto: su empresa prioriza proveedores o servicios con impacto social o ambiental positivo cuando es viable."),
        question("a10", DimensionId::Alianzas, "Intercambio de buenas prácticas: su empresa comparte y/o recibe buenas prácticas en sostenibilidad."),
        question("a11", DimensionId::Alianzas, "Evaluación de alianzas: su empresa evalúa resultados o impacto de las colaboraciones."),
        question("a12", DimensionId::Alianzas, "Visión a largo plazo: las alianzas se integran en la estrategia y no son solo acciones puntuales."),
    ]
}

fn recommendations() -> RecommendationTable {
    let entries = [
        (
            DimensionId::Gestion,
            [
                (MaturityTier::Inicial, "Prioridad: Redacte un documento sencillo de 'Compromiso con la Sostenibilidad' y asígnele la responsabilidad a una persona del equipo."),
                (MaturityTier::Proceso, "Formalice su estrategia: Defina objetivos anuales de sostenibilidad y revíselos periódicamente en la dirección."),
                (MaturityTier::Avanzado, "Integre la sostenibilidad: Vincule objetivos al desempeño y elabore un Código Ético con canal de denuncias."),
                (MaturityTier::Lider, "Excelencia: Publique una Memoria de Sostenibilidad y lidere en ética y transparencia sectorial."),
            ],
        ),
        (
            DimensionId::Personas,
            [
                (MaturityTier::Inicial, "Cumplimiento: Asegure el registro horario, prevención de riesgos y contratos formalizados."),
                (MaturityTier::Proceso, "Desarrollo: Implemente planes de formación y protocolos de prevención del acoso."),
                (MaturityTier::Avanzado, "Bienestar: Mida el clima laboral y ofrezca medidas de conciliación superiores a la ley."),
                (MaturityTier::Lider, "Talento Diverso: Implemente currículum ciego, igualdad retributiva auditada y planes de bienestar integral."),
            ],
        ),
        (
            DimensionId::Planeta,
            [
                (MaturityTier::Inicial, "Control Básico: Registre facturas de energía, agua y combustible para tener una línea base."),
                (MaturityTier::Proceso, "Eficiencia: Implemente medidas de ahorro (LEDs, sensores) y segregación de residuos."),
                (MaturityTier::Avanzado, "Medición: Calcule su Huella de Carbono y contrate energía 100% renovable."),
                (MaturityTier::Lider, "Net Zero: Objetivos de reducción basados en ciencia, economía circular y ecodiseño."),
            ],
        ),
        (
            DimensionId::Prosperidad,
            [
                (MaturityTier::Inicial, "Orden Financiero: Digitalice facturación y asegure control de flujo de caja y pagos."),
                (MaturityTier::Proceso, "Digitalización: Implante herramientas de gestión y priorice proveedores locales."),
                (MaturityTier::Avanzado, "Innovación: Invierta en I+D+i y evalúe a proveedores con criterios ESG."),
                (MaturityTier::Lider, "Valor Compartido: Mida el impacto social y económico en el entorno y promueva la innovación abierta."),
            ],
        ),
        (
            DimensionId::Alianzas,
            [
                (MaturityTier::Inicial, "Conexión: Asóciese a organizaciones sectoriales y participe en eventos locales."),
                (MaturityTier::Proceso, "Colaboración: Realice acciones puntuales con entidades sociales o educativas."),
                (MaturityTier::Avanzado, "Estratégico: Firme convenios estables con ONGs o centros de FP Dual."),
                (MaturityTier::Lider, "Liderazgo: Impulse proyectos multi-actor para resolver retos sociales complejos."),
            ],
        ),
    ];

    entries
        .into_iter()
        .map(|(dimension, by_tier)| {
            let by_tier: BTreeMap<MaturityTier, String> = by_tier
                .into_iter()
                .map(|(tier, text)| (tier, text.to_string()))
                .collect();
            (dimension, by_tier)
        })
        .collect()
}
