//! Point features and their stable text rendering.
use std::fmt;

use glam::DVec2;
use mint::Point2;

use crate::synthesis::FeatureRecord;

/// A single point feature with an integer id and one string property.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFeature {
    /// Feature identifier written to the record's `id` field.
    pub id: i64,
    /// Point coordinates (x, y).
    pub position: DVec2,
    /// Value of the `value` property.
    pub value: String,
}

impl PointFeature {
    pub fn new(id: i64, position: impl Into<DVec2>, value: impl Into<String>) -> Self {
        Self {
            id,
            position: position.into(),
            value: value.into(),
        }
    }

    /// Position as a `mint` point for interop with other math crates.
    pub fn point(&self) -> Point2<f64> {
        Point2 {
            x: self.position.x,
            y: self.position.y,
        }
    }

    /// Renders the feature into its record text.
    pub fn to_record(&self) -> FeatureRecord {
        self.to_string()
    }
}

// Field names and order are relied upon by downstream parsers.
impl fmt::Display for PointFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ \"type\": \"Feature\", \"id\": {},\n\"geometry\": {{\"type\": \"Point\",\"coordinates\": [  {}, {} ]  }},\n\"properties\": {{ \"value\": \"",
            self.id, self.position.x, self.position.y
        )?;
        write_escaped(f, &self.value)?;
        f.write_str("\"  } }")
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}
