//! Data model for extracted documentation — one record per `@doc` block.

use serde::Deserialize;
use std::fmt;

/// A single documentation entry, tagged by its `category` field.
///
/// Each variant's struct rejects unknown fields, so a block either matches
/// exactly one shape or fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum DocRecord {
    Type(TypeDoc),
    Source(SourceDoc),
    Action(ActionDoc),
    Autocmd(AutocmdDoc),
    Api(ApiDoc),
}

/// A LuaCATS `@class` definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDoc {
    pub name: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceDoc {
    pub name: String,
    pub desc: String,
    pub options: Option<Vec<SourceOption>>,
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceOption {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub default: Option<String>,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionDoc {
    pub name: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutocmdDoc {
    pub name: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiDoc {
    pub name: String,
    pub args: Option<Vec<ApiArg>>,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiArg {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub desc: String,
}

/// Record discriminant. Ordering follows the literal names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Action,
    Api,
    Autocmd,
    Source,
    Type,
}

impl Category {
    /// Order in which README regions are regenerated.
    pub const SPLICE_ORDER: [Category; 5] = [
        Category::Action,
        Category::Source,
        Category::Autocmd,
        Category::Api,
        Category::Type,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Action => "action",
            Category::Api => "api",
            Category::Autocmd => "autocmd",
            Category::Source => "source",
            Category::Type => "type",
        }
    }

    pub fn start_marker(&self) -> String {
        format!("<!-- auto-generate-s:{} -->", self.as_str())
    }

    pub fn end_marker(&self) -> String {
        format!("<!-- auto-generate-e:{} -->", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DocRecord {
    pub fn category(&self) -> Category {
        match self {
            DocRecord::Type(_) => Category::Type,
            DocRecord::Source(_) => Category::Source,
            DocRecord::Action(_) => Category::Action,
            DocRecord::Autocmd(_) => Category::Autocmd,
            DocRecord::Api(_) => Category::Api,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DocRecord::Type(doc) => &doc.name,
            DocRecord::Source(doc) => &doc.name,
            DocRecord::Action(doc) => &doc.name,
            DocRecord::Autocmd(doc) => &doc.name,
            DocRecord::Api(doc) => &doc.name,
        }
    }
}

/// Sort records by category name, then by record name.
///
/// Uses a stable sort; records sharing both keys keep discovery order.
pub fn sort_records(records: &mut [DocRecord]) {
    records.sort_by(|a, b| {
        a.category()
            .as_str()
            .cmp(b.category().as_str())
            .then_with(|| a.name().cmp(b.name()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(name: &str) -> DocRecord {
        DocRecord::Action(ActionDoc {
            name: name.to_string(),
            desc: String::new(),
        })
    }

    fn api(name: &str) -> DocRecord {
        DocRecord::Api(ApiDoc {
            name: name.to_string(),
            args: None,
            desc: String::new(),
        })
    }

    #[test]
    fn sort_by_category_then_name() {
        let mut records = vec![api("b"), action("z"), api("a")];
        sort_records(&mut records);
        let keys: Vec<_> = records
            .iter()
            .map(|r| format!("{}/{}", r.category(), r.name()))
            .collect();
        assert_eq!(keys, vec!["action/z", "api/a", "api/b"]);
    }

    #[test]
    fn category_order_matches_literal_names() {
        let mut names: Vec<_> = Category::SPLICE_ORDER.iter().map(|c| c.as_str()).collect();
        names.sort();
        let mut cats = Category::SPLICE_ORDER.to_vec();
        cats.sort();
        let sorted: Vec<_> = cats.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, sorted);
    }

    #[test]
    fn markers() {
        assert_eq!(
            Category::Autocmd.start_marker(),
            "<!-- auto-generate-s:autocmd -->"
        );
        assert_eq!(Category::Type.end_marker(), "<!-- auto-generate-e:type -->");
    }
}
