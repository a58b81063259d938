use serde::Serialize;

pub const SPECIALISTS: [&str; 3] = [
    "Иван Иванов. Стаж 5 лет. Мастер по укладкам и необычным стрижкам.",
    "Петр Петров. Стаж 7 лет. Сделает из вашей бороды конфетку.",
    "Сергей Сергеев. Стаж 3 года. Умеет и в маникюр и в стрижки. Универсальный солдат :)",
];

pub const STRIZHKA_TYPES: [&str; 3] = ["Ножницами", "Под машинку", "Стрижка + укладка"];

const SPECIALIST_PLACEHOLDER: &str = "-- выберите специалиста --";
const SERVICE_PLACEHOLDER: &str = "-- выберите услугу --";
const STRIZHKA_PLACEHOLDER: &str = "-- выберите тип стрижки --";
const TIME_PLACEHOLDER: &str = "-- выберите время --";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Service {
    #[serde(rename = "Стрижка")]
    Haircut,
    #[serde(rename = "Бритье")]
    Shave,
    #[serde(rename = "Маникюр")]
    Manicure,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::Haircut, Service::Shave, Service::Manicure];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Haircut => "Стрижка",
            Service::Shave => "Бритье",
            Service::Manicure => "Маникюр",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Service::ALL.into_iter().find(|svc| svc.as_str() == s)
    }

    /// Only haircuts come with a style sub-option.
    pub fn has_strizhka_type(&self) -> bool {
        matches!(self, Service::Haircut)
    }
}

/// One `<option>` of a select input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
}

impl SelectOption {
    fn item(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
            disabled: false,
            selected: false,
        }
    }

    /// Empty-valued, disabled entry that starts out selected.
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
            disabled: true,
            selected: true,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

fn build<'a>(
    placeholder: Option<SelectOption>,
    values: impl IntoIterator<Item = &'a str>,
) -> Vec<SelectOption> {
    placeholder
        .into_iter()
        .chain(values.into_iter().map(SelectOption::item))
        .collect()
}

pub fn specialist_options(with_placeholder: bool) -> Vec<SelectOption> {
    build(
        with_placeholder.then(|| SelectOption::placeholder(SPECIALIST_PLACEHOLDER)),
        SPECIALISTS,
    )
}

pub fn service_options(with_placeholder: bool) -> Vec<SelectOption> {
    build(
        with_placeholder.then(|| SelectOption::placeholder(SERVICE_PLACEHOLDER)),
        Service::ALL.iter().map(|s| s.as_str()),
    )
}

pub fn strizhka_options(with_placeholder: bool) -> Vec<SelectOption> {
    build(
        with_placeholder.then(|| SelectOption::placeholder(STRIZHKA_PLACEHOLDER)),
        STRIZHKA_TYPES,
    )
}

/// Slot list for a date. Its placeholder stays selectable and unselected.
pub fn time_options(with_placeholder: bool, slots: &[String]) -> Vec<SelectOption> {
    let placeholder = with_placeholder.then(|| SelectOption {
        selected: false,
        disabled: false,
        ..SelectOption::placeholder(TIME_PLACEHOLDER)
    });
    build(placeholder, slots.iter().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_round_trip_names() {
        assert_eq!(Service::parse("Стрижка"), Some(Service::Haircut));
        assert_eq!(Service::parse("Маникюр"), Some(Service::Manicure));
        assert_eq!(Service::parse("Haircut"), None);
        assert_eq!(
            serde_json::to_string(&Service::Shave).unwrap(),
            "\"Бритье\""
        );
    }

    #[test]
    fn test_only_haircut_has_type() {
        assert!(Service::Haircut.has_strizhka_type());
        assert!(!Service::Shave.has_strizhka_type());
        assert!(!Service::Manicure.has_strizhka_type());
    }

    #[test]
    fn test_specialists_with_placeholder() {
        let opts = specialist_options(true);
        assert_eq!(opts.len(), 4);
        assert!(opts[0].is_placeholder());
        assert!(opts[0].disabled);
        assert!(opts[0].selected);
        assert_eq!(opts[0].label, "-- выберите специалиста --");
        assert_eq!(opts[1].value, SPECIALISTS[0]);
    }

    #[test]
    fn test_options_without_placeholder() {
        assert_eq!(specialist_options(false).len(), 3);
        assert_eq!(service_options(false).len(), 3);
        assert_eq!(strizhka_options(false).len(), 3);
        assert!(service_options(false).iter().all(|o| !o.is_placeholder()));
    }

    #[test]
    fn test_time_placeholder_selectable() {
        let slots = vec!["09:00".to_string(), "10:00".to_string()];
        let opts = time_options(true, &slots);
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[0].label, "-- выберите время --");
        assert!(!opts[0].disabled);
        assert!(!opts[0].selected);
        assert_eq!(opts[2].value, "10:00");

        assert_eq!(time_options(false, &slots).len(), 2);
    }
}
