pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn error_body_serializes_message() {
        let body = types::ErrorBody::new("No artist logged in!");
        assert_eq!(body.error, "No artist logged in!");
    }
}
