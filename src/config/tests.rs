#[cfg(test)]
mod tests {
    use super::super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.addr, "127.0.0.1:8080");
        assert!(config.server.database.is_none());
        assert_eq!(config.contact.phone, "+1234567890");
        assert_eq!(config.contact.email, "contact@smarthomeit.com");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[contact]
phone = "+44 20 7946 0958"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.contact.phone, "+44 20 7946 0958");
        assert_eq!(config.contact.email, "contact@smarthomeit.com");
        assert_eq!(
            config.messages.whatsapp,
            "Hi! I'm interested in your IT smart home solutions."
        );
        assert!(config
            .contact_links()
            .whatsapp
            .href
            .starts_with("https://wa.me/442079460958?"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[contact\nphone = 1").unwrap();
        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn test_bad_contact_details_are_warnings() {
        let mut config = Config::default();
        config.contact.phone = "call us".to_string();
        config.contact.email = "not-an-email".to_string();

        let warnings = config.validate();
        assert_eq!(
            warnings,
            vec![
                ConfigWarning::PhoneHasNoDigits("call us".to_string()),
                ConfigWarning::InvalidEmail("not-an-email".to_string()),
            ]
        );
        // Links are still produced
        assert_eq!(config.contact_links().whatsapp.href, "https://wa.me/?text=Hi%21%20I%27m%20interested%20in%20your%20IT%20smart%20home%20solutions.");
    }

    #[test]
    fn test_database_path_precedence() {
        let mut config = Config::default();
        config.server.database = Some(PathBuf::from("/from/config.sqlite"));

        assert_eq!(
            config.database_path(Some(Path::new("/from/cli.sqlite"))),
            Some(PathBuf::from("/from/cli.sqlite"))
        );
        assert_eq!(
            config.database_path(None),
            Some(PathBuf::from("/from/config.sqlite"))
        );
    }
}
