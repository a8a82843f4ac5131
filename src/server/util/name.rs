/// Public form of a pilot's name: first name followed by the initial of the last name.
///
/// `"Jane Mary Doe"` becomes `"Jane D"`, single names are returned as they are.
pub fn private_name(name: &str) -> String {
    let mut parts = name.split_whitespace();

    let Some(first) = parts.next() else {
        return String::new();
    };

    match parts.last().and_then(|last| last.chars().next()) {
        Some(initial) => format!("{} {}", first, initial),
        None => first.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::private_name;

    #[test]
    fn shortens_last_name_to_initial() {
        assert_eq!(private_name("Jane Mary Doe"), "Jane D");
        assert_eq!(private_name("Ömer Çelik"), "Ömer Ç");
    }

    #[test]
    fn keeps_single_names() {
        assert_eq!(private_name("Cher"), "Cher");
        assert_eq!(private_name("  "), "");
    }
}
