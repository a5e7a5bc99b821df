use serde::{Deserialize, Serialize};

pub const COMPANY_SIZE_OPTIONS: [&str; 5] = [
    "Microempresa (1-9)",
    "Pequeña (10-49)",
    "Mediana (50-249)",
    "Grande (250 o más)",
    "No lo sé / Prefiero no decir",
];

pub const SECTOR_OPTIONS: [&str; 23] = [
    "A. Agricultura, ganadería, silvicultura y pesca",
    "B. Industrias extractivas",
    "C. Industria manufacturera",
    "D. Suministro de energía eléctrica, gas, vapor y aire acondicionado",
    "E. Suministro de agua; saneamiento, residuos y descontaminación",
    "F. Construcción",
    "G. Comercio; reparación de vehículos de motor y motocicletas",
    "H. Transporte y almacenamiento",
    "I. Hostelería",
    "J. Información y comunicaciones",
    "K. Actividades financieras y de seguros",
    "L. Actividades inmobiliarias",
    "M. Actividades profesionales, científicas y técnicas",
    "N. Actividades administrativas y servicios auxiliares",
    "O. Administración pública y defensa; Seguridad Social obligatoria",
    "P. Educación",
    "Q. Actividades sanitarias y de servicios sociales",
    "R. Actividades artísticas, recreativas y de entretenimiento",
    "S. Otros servicios",
    "T. Hogares como empleadores; bienes/servicios para uso propio",
    "U. Organismos extraterritoriales",
    "No lo sé / Prefiero no decir",
    "Otro",
];

pub const LOCATION_OPTIONS: [&str; 10] = [
    "Tenerife",
    "Gran Canaria",
    "La Palma",
    "La Gomera",
    "El Hierro",
    "Lanzarote",
    "Fuerteventura",
    "La Graciosa",
    "Fuera de Canarias",
    "Otro",
];

pub const ROLE_OPTIONS: [&str; 11] = [
    "Dirección / Gerencia",
    "Sostenibilidad / RSC / ESG",
    "Administración / Finanzas",
    "Personas / RRHH",
    "Operaciones / Producción",
    "Calidad / Medio ambiente / PRL",
    "Comercial / Marketing",
    "Personal técnico / Administrativo",
    "Propietario/a · Autónomo/a",
    "Prefiero no decirlo",
    "Otro",
];

/// Organization details captured before the questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub size: String,
    pub sector: String,
    pub location: String,
    pub role: String,
}

impl CompanyProfile {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("size", &self.size),
            ("sector", &self.sector),
            ("location", &self.location),
            ("role", &self.role),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn display_name(&self) -> &str {
        self.business_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("No especificado")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_blank_required_fields() {
        let profile = CompanyProfile {
            business_name: None,
            size: COMPANY_SIZE_OPTIONS[0].to_string(),
            sector: " ".to_string(),
            location: LOCATION_OPTIONS[0].to_string(),
            role: String::new(),
        };
        assert_eq!(profile.missing_fields(), vec!["sector", "role"]);
    }

    #[test]
    fn display_name_falls_back_when_blank() {
        let mut profile = CompanyProfile::default();
        assert_eq!(profile.display_name(), "No especificado");
        profile.business_name = Some("Atlántica Foods".to_string());
        assert_eq!(profile.display_name(), "Atlántica Foods");
    }
}
