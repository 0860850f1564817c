//! Greeting messages

/// The classic first program output
pub const HELLO_WORLD: &str = "Hello, World!";

/// Build a welcome message for the given name
pub fn greeting(name: &str) -> String {
    format!("Hi, {}. Welcome!", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_includes_name() {
        assert_eq!(greeting("Gladys"), "Hi, Gladys. Welcome!");
    }

    #[test]
    fn test_greeting_empty_name() {
        assert_eq!(greeting(""), "Hi, . Welcome!");
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(HELLO_WORLD, "Hello, World!");
    }
}
