use std::fmt;
use crate::drivers::ScopeError;
/// One parsed telemetry line, one value per field.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub values: Vec<f64>,
    /// Trimmed field text exactly as the device sent it.
    pub fields: Vec<String>,
}
impl Sample {
    pub fn new(values: Vec<f64>) -> Self {
        let fields = values.iter().map(|v| v.to_string()).collect();
        Self { values, fields }
    }
    pub fn arity(&self) -> usize {
        self.values.len()
    }
}
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields.join(", "))
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Float,
}
/// Wire format of a single line: delimiter, field count and numeric type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineFormat {
    pub delimiter: char,
    pub arity: usize,
    pub numbers: NumberKind,
}
impl LineFormat {
    /// `a;b;c` with float fields.
    pub const fn semicolon_triple() -> Self {
        Self {
            delimiter: ';',
            arity: 3,
            numbers: NumberKind::Float,
        }
    }
    /// `x,y` with integer fields.
    pub const fn comma_pair() -> Self {
        Self {
            delimiter: ',',
            arity: 2,
            numbers: NumberKind::Integer,
        }
    }
    pub fn parse(&self, line: &str) -> Result<Sample, ScopeError> {
        let trimmed = line.trim();
        let fields: Vec<&str> = trimmed.split(self.delimiter).collect();
        if fields.len() != self.arity {
            return Err(ScopeError::Arity {
                expected: self.arity,
                actual: fields.len(),
                line: trimmed.to_string(),
            });
        }
        let fields: Vec<String> = fields.iter().map(|raw| raw.trim().to_string()).collect();
        let values = fields
            .iter()
            .enumerate()
            .map(|(index, raw)| self.parse_field(index, raw))
            .collect::<Result<Vec<f64>, ScopeError>>()?;
        Ok(Sample { values, fields })
    }
    /// Inverse of `parse`, terminated with `\r\n` like a device would send it.
    pub fn render(&self, values: &[f64]) -> String {
        let mut line = values
            .iter()
            .map(|v| match self.numbers {
                NumberKind::Integer => format!("{}", v.round() as i64),
                NumberKind::Float => format!("{v:.3}"),
            })
            .collect::<Vec<_>>()
            .join(&self.delimiter.to_string());
        line.push_str("\r\n");
        line
    }
    fn parse_field(&self, index: usize, raw: &str) -> Result<f64, ScopeError> {
        let parsed = match self.numbers {
            NumberKind::Integer => raw.parse::<i64>().ok().map(|v| v as f64),
            NumberKind::Float => raw.parse::<f64>().ok(),
        };
        parsed.ok_or_else(|| ScopeError::Field {
            index,
            field: raw.to_string(),
        })
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn comma_pair_parses_integers() {
        let sample = LineFormat::comma_pair().parse("1,2").unwrap();
        assert_eq!(sample.values, vec![1.0, 2.0]);
    }
    #[test]
    fn comma_pair_rejects_text_field() {
        let err = LineFormat::comma_pair().parse("abc,12").unwrap_err();
        match err {
            ScopeError::Field { index, field } => {
                assert_eq!(index, 0);
                assert_eq!(field, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
    #[test]
    fn comma_pair_rejects_fractional_values() {
        assert!(LineFormat::comma_pair().parse("1.5,2").is_err());
    }
    #[test]
    fn semicolon_triple_strips_line_ending_and_spaces() {
        let sample = LineFormat::semicolon_triple()
            .parse(" 1.5; -2 ;3e1\r\n")
            .unwrap();
        assert_eq!(sample.values, vec![1.5, -2.0, 30.0]);
    }
    #[test]
    fn wrong_arity_is_reported() {
        let err = LineFormat::semicolon_triple().parse("1;2\r\n").unwrap_err();
        assert!(matches!(
            err,
            ScopeError::Arity {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }
    #[test]
    fn empty_line_is_rejected() {
        assert!(LineFormat::semicolon_triple().parse("").is_err());
        assert!(LineFormat::comma_pair().parse("\r\n").is_err());
    }
    #[test]
    fn rendered_line_parses_back() {
        let format = LineFormat::semicolon_triple();
        let line = format.render(&[1.25, 2.0, -3.5]);
        assert!(line.ends_with("\r\n"));
        assert_eq!(format.parse(&line).unwrap().values, vec![1.25, 2.0, -3.5]);
    }
    #[test]
    fn sample_display_joins_with_commas() {
        assert_eq!(Sample::new(vec![1.0, 2.5, 3.0]).to_string(), "1, 2.5, 3");
    }
    #[test]
    fn sample_display_keeps_device_text() {
        let sample = LineFormat::semicolon_triple()
            .parse("1.50; 2.0 ;3e1\r\n")
            .unwrap();
        assert_eq!(sample.values, vec![1.5, 2.0, 30.0]);
        assert_eq!(sample.to_string(), "1.50, 2.0, 3e1");
    }
}
