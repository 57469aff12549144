use serde::{Deserialize, Serialize};

/// A stored fruit record. The `id` is assigned by the store at creation and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fruit {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub ready_to_eat: bool,
}

/// The editable fields of a fruit, as submitted through the HTML forms.
/// Updates overwrite all three fields; nothing is preserved from the old
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub ready_to_eat: bool,
}

impl FruitFields {
    pub fn new(name: &str, color: &str, ready_to_eat: bool) -> Self {
        Self {
            name: Some(name.to_string()),
            color: Some(color.to_string()),
            ready_to_eat,
        }
    }
}

/// Raw form body for create/update. `ready_to_eat` arrives as the checkbox's
/// literal value (or not at all) and must go through [`coerce_checkbox`]
/// before it is stored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitForm {
    pub name: Option<String>,
    pub color: Option<String>,
    pub ready_to_eat: Option<String>,
}

impl FruitForm {
    /// Coerce the submitted body into storable fields.
    pub fn into_fields(self) -> FruitFields {
        FruitFields {
            name: self.name,
            color: self.color,
            ready_to_eat: coerce_checkbox(self.ready_to_eat.as_deref()),
        }
    }
}

/// Checkbox coercion rule: a checked HTML checkbox submits the literal string
/// `"on"`; every other value, including a missing field, means unchecked.
pub fn coerce_checkbox(raw: Option<&str>) -> bool {
    raw == Some("on")
}

/// The fixed starter records installed by the seed route.
pub fn starter_fruits() -> Vec<FruitFields> {
    vec![
        FruitFields::new("Orange", "orange", false),
        FruitFields::new("Grape", "purple", true),
        FruitFields::new("Banana", "orange", false),
        FruitFields::new("Strawberry", "red", true),
        FruitFields::new("Coconut", "brown", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_on_is_true() {
        assert!(coerce_checkbox(Some("on")));
    }

    #[test]
    fn checkbox_anything_else_is_false() {
        assert!(!coerce_checkbox(Some("true")));
        assert!(!coerce_checkbox(Some("ON")));
        assert!(!coerce_checkbox(Some("")));
        assert!(!coerce_checkbox(None));
    }

    #[test]
    fn form_coercion_applies_to_fields() {
        let form = FruitForm {
            name: Some("Kiwi".into()),
            color: Some("green".into()),
            ready_to_eat: Some("on".into()),
        };
        let fields = form.into_fields();
        assert_eq!(fields.name.as_deref(), Some("Kiwi"));
        assert!(fields.ready_to_eat);

        let form = FruitForm {
            name: Some("Kiwi".into()),
            color: Some("green".into()),
            ready_to_eat: None,
        };
        assert!(!form.into_fields().ready_to_eat);
    }

    #[test]
    fn starter_list_is_the_five_known_fruits() {
        let starters = starter_fruits();
        let names: Vec<_> = starters
            .iter()
            .map(|f| f.name.as_deref().unwrap())
            .collect();
        assert_eq!(
            names,
            ["Orange", "Grape", "Banana", "Strawberry", "Coconut"]
        );
        let ready: Vec<_> = starters.iter().map(|f| f.ready_to_eat).collect();
        assert_eq!(ready, [false, true, false, true, false]);
    }

    #[test]
    fn fruit_serializes_with_camel_case_flag() {
        let fruit = Fruit {
            id: "abc".into(),
            name: Some("Grape".into()),
            color: Some("purple".into()),
            ready_to_eat: true,
        };
        let json = serde_json::to_value(&fruit).unwrap();
        assert_eq!(json["readyToEat"], serde_json::json!(true));
        assert_eq!(json["name"], serde_json::json!("Grape"));
    }
}
