/// Either a piece of text or a number. There is no third case.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

/// Length of text in UTF-16 code units, twice the value for numbers.
pub fn process_value(value: &Value) -> f64 {
    match value {
        Value::Text(s) => s.encode_utf16().count() as f64,
        Value::Number(n) => n * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_length() {
        assert_eq!(process_value(&"hello".into()), 5.0);
        assert_eq!(process_value(&Value::Text(String::new())), 0.0);
    }

    #[test]
    fn test_length_in_utf16_units() {
        assert_eq!(process_value(&"héllo".into()), 5.0);
        assert_eq!(process_value(&"😀".into()), 2.0);
        assert_eq!(process_value(&"a😀b".into()), 4.0);
    }

    #[test]
    fn test_number_doubled() {
        assert_eq!(process_value(&10.into()), 20.0);
        assert_eq!(process_value(&Value::Number(-1.5)), -3.0);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from("a"), Value::Text("a".to_string()));
        assert_eq!(Value::from(String::from("b")), Value::Text("b".to_string()));
        assert_eq!(Value::from(2.5), Value::Number(2.5));
        assert_eq!(Value::from(3), Value::Number(3.0));
    }
}
