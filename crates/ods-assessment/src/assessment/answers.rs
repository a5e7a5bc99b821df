use super::catalog::AssessmentCatalog;
use super::domain::AnswerValue;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::warn;

/// Snapshot of raw answers keyed by question id.
///
/// Values are kept exactly as persisted; classification happens on lookup so
/// stale or hand-edited data never prevents scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, f64>);

/// Outcome of looking up one question in an [`AnswerSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnswerLookup {
    Missing,
    Recognized(AnswerValue),
    Unrecognized(f64),
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(question_id.into(), value)
    }

    pub fn remove(&mut self, question_id: &str) -> Option<f64> {
        self.0.remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<f64> {
        self.0.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn lookup(&self, question_id: &str) -> AnswerLookup {
        match self.get(question_id) {
            None => AnswerLookup::Missing,
            Some(raw) => match AnswerValue::from_raw(raw) {
                Some(value) => AnswerLookup::Recognized(value),
                None => AnswerLookup::Unrecognized(raw),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, f64> {
        self.0.iter()
    }

    /// Answer keys that do not name any question in `catalog`.
    pub fn unknown_questions<'a>(&'a self, catalog: &AssessmentCatalog) -> Vec<&'a str> {
        self.0
            .keys()
            .filter(|id| catalog.question(id).is_none())
            .map(String::as_str)
            .collect()
    }

    /// Logs and returns the keys that reference no catalog question.
    pub fn warn_unknown_questions<'a>(&'a self, catalog: &AssessmentCatalog) -> Vec<&'a str> {
        let unknown = self.unknown_questions(catalog);
        for question_id in &unknown {
            warn!(%question_id, "ignoring answer for unknown question");
        }
        unknown
    }

    /// Reads a JSON object of `{"question_id": value}` pairs.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, AnswerImportError> {
        serde_json::from_reader(reader).map_err(AnswerImportError::Json)
    }

    /// Reads a CSV export with a `question_id,value` header.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut answers = Self::new();

        for record in csv_reader.deserialize::<AnswerRow>() {
            let row = record.map_err(AnswerImportError::Csv)?;
            if answers.insert(row.question_id.clone(), row.value).is_some() {
                return Err(AnswerImportError::DuplicateAnswer(row.question_id));
            }
        }

        Ok(answers)
    }

    /// Picks the format from the file extension; anything but `.csv` is JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AnswerImportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(AnswerImportError::Io)?;
        let reader = BufReader::new(file);

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            Self::from_csv_reader(reader)
        } else {
            Self::from_json_reader(reader)
        }
    }
}

impl From<BTreeMap<String, f64>> for AnswerSet {
    fn from(value: BTreeMap<String, f64>) -> Self {
        Self(value)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, value)| (id.into(), value)).collect())
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = (&'a String, &'a f64);
    type IntoIter = btree_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question_id: String,
    value: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("invalid answers JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("invalid answers CSV: {0}")]
    Csv(#[source] csv::Error),
    #[error("question '{0}' is answered more than once")]
    DuplicateAnswer(String),
    #[error("unable to read answers: {0}")]
    Io(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_distinguishes_missing_recognized_and_unrecognized() {
        let answers: AnswerSet = [("g1", 2.0), ("g2", -1.0), ("g3", 7.0)].into_iter().collect();

        assert_eq!(answers.lookup("g1"), AnswerLookup::Recognized(AnswerValue::Scale(2)));
        assert_eq!(
            answers.lookup("g2"),
            AnswerLookup::Recognized(AnswerValue::NotApplicable)
        );
        assert_eq!(answers.lookup("g3"), AnswerLookup::Unrecognized(7.0));
        assert_eq!(answers.lookup("g4"), AnswerLookup::Missing);
    }

    #[test]
    fn parses_json_object() {
        let answers =
            AnswerSet::from_json_reader(r#"{"g1": 3, "p2": 0.1, "pl1": -1}"#.as_bytes())
                .expect("json parses");
        assert_eq!(answers.len(), 3);
        assert_eq!(answers.get("p2"), Some(0.1));
    }

    #[test]
    fn parses_csv_with_whitespace() {
        let csv = "question_id,value\n g1 , 3\ng2,1\npl4,-1\n";
        let answers = AnswerSet::from_csv_reader(csv.as_bytes()).expect("csv parses");
        assert_eq!(answers.get("g1"), Some(3.0));
        assert_eq!(answers.get("pl4"), Some(-1.0));
    }

    #[test]
    fn csv_rejects_duplicate_rows() {
        let csv = "question_id,value\ng1,3\ng1,2\n";
        assert!(matches!(
            AnswerSet::from_csv_reader(csv.as_bytes()),
            Err(AnswerImportError::DuplicateAnswer(id)) if id == "g1"
        ));
    }

    #[test]
    fn csv_rejects_non_numeric_values() {
        let csv = "question_id,value\ng1,mucho\n";
        assert!(matches!(
            AnswerSet::from_csv_reader(csv.as_bytes()),
            Err(AnswerImportError::Csv(_))
        ));
    }

    #[test]
    fn reports_answers_for_unknown_questions() {
        let catalog = AssessmentCatalog::standard();
        let answers: AnswerSet = [("g1", 1.0), ("zz9", 2.0)].into_iter().collect();
        assert_eq!(answers.unknown_questions(&catalog), vec!["zz9"]);
    }
}
