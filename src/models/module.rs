use serde::Serialize;
use serde_json::Value;

use crate::router::Route;

/// Karta modulu na dashboardu
///
/// Tvar záznamu určuje server. Cardinal vrací buď jen názvy modulů,
/// nebo objekty s polem `name`.
#[derive(Debug, Serialize)]
pub struct ModuleCard {
    pub name: String,
    pub href: Option<String>,
    pub description: Option<String>,
    pub raw_json: String,
}

impl ModuleCard {
    pub fn from_record(index: usize, record: &Value) -> Self {
        let name = module_name(record);
        let href = name
            .map(|module_name| Route::ModuleDetails { module_name: module_name.to_string() }.path());
        let description = record["description"].as_str().map(|s| s.to_string());

        Self {
            name: name.map(|s| s.to_string()).unwrap_or_else(|| format!("#{}", index + 1)),
            href,
            description,
            raw_json: pretty_json(record),
        }
    }
}

/// Detail modulu pro `/modules/{module_name}`
#[derive(Debug, Serialize)]
pub struct ModuleDetail {
    pub description: Option<String>,
    pub raw_json: String,
}

impl ModuleDetail {
    pub fn lookup(modules: &[Value], name: &str) -> Option<Self> {
        let record = modules.iter().find(|m| module_name(m) == Some(name))?;

        Some(Self {
            description: record["description"].as_str().map(|s| s.to_string()),
            raw_json: pretty_json(record),
        })
    }
}

fn module_name(record: &Value) -> Option<&str> {
    let name = match record {
        Value::String(name) => Some(name.as_str()),
        other => other["name"].as_str(),
    };
    name.filter(|name| !name.is_empty())
}

pub(crate) fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_from_plain_name() {
        let card = ModuleCard::from_record(0, &json!("example_module"));
        assert_eq!(card.name, "example_module");
        assert_eq!(card.href.as_deref(), Some("/modules/example_module"));
        assert_eq!(card.description, None);
    }

    #[test]
    fn test_card_from_object() {
        let card = ModuleCard::from_record(
            3,
            &json!({"name": "billing", "description": "Invoices", "routes": 4}),
        );
        assert_eq!(card.name, "billing");
        assert_eq!(card.href.as_deref(), Some("/modules/billing"));
        assert_eq!(card.description.as_deref(), Some("Invoices"));
        assert!(card.raw_json.contains("\"routes\": 4"));
    }

    #[test]
    fn test_card_without_name_has_no_link() {
        let card = ModuleCard::from_record(1, &json!({"id": 7}));
        assert_eq!(card.name, "#2");
        assert_eq!(card.href, None);

        let empty = ModuleCard::from_record(0, &json!(""));
        assert_eq!(empty.name, "#1");
        assert_eq!(empty.href, None);
    }

    #[test]
    fn test_lookup_by_name() {
        let modules = vec![json!("alpha"), json!({"name": "beta", "description": "Second"})];

        assert!(ModuleDetail::lookup(&modules, "alpha").is_some());
        let beta = ModuleDetail::lookup(&modules, "beta").unwrap();
        assert_eq!(beta.description.as_deref(), Some("Second"));
        assert!(ModuleDetail::lookup(&modules, "gamma").is_none());
    }
}
