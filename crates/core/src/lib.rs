pub mod analysis;
pub mod dataset;
pub mod domain;
pub mod service;

pub mod config {
    use std::path::PathBuf;

    pub const DEFAULT_DATA_PATH: &str = "data/companies_data.csv";
    pub const DEFAULT_PORT: u16 = 5000;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub data_path: PathBuf,
        pub port: u16,
        pub frontend_dir: Option<PathBuf>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Blank values count as unset; an unparseable `PORT` falls back to the default.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
            let non_blank = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

            Ok(Self {
                data_path: non_blank("COMPANIES_DATA_PATH")
                    .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string())
                    .into(),
                port: lookup("PORT")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(DEFAULT_PORT),
                frontend_dir: non_blank("FRONTEND_DIR").map(PathBuf::from),
                sentry_dsn: non_blank("SENTRY_DSN"),
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn settings(vars: &[(&str, &str)]) -> Settings {
            let vars: HashMap<String, String> = vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            Settings::from_lookup(|key| vars.get(key).cloned()).unwrap()
        }

        #[test]
        fn defaults_when_unset() {
            let s = settings(&[]);
            assert_eq!(s.data_path, PathBuf::from("data/companies_data.csv"));
            assert_eq!(s.port, 5000);
            assert!(s.frontend_dir.is_none());
            assert!(s.sentry_dsn.is_none());
        }

        #[test]
        fn reads_configured_values() {
            let s = settings(&[
                ("COMPANIES_DATA_PATH", "/srv/data.csv"),
                ("PORT", "8080"),
                ("FRONTEND_DIR", "frontend"),
                ("SENTRY_DSN", "https://key@sentry.example/1"),
            ]);
            assert_eq!(s.data_path, PathBuf::from("/srv/data.csv"));
            assert_eq!(s.port, 8080);
            assert_eq!(s.frontend_dir, Some(PathBuf::from("frontend")));
            assert_eq!(s.sentry_dsn.as_deref(), Some("https://key@sentry.example/1"));
        }

        #[test]
        fn unparseable_port_falls_back_to_default() {
            assert_eq!(settings(&[("PORT", "abc")]).port, 5000);
            assert_eq!(settings(&[("PORT", "70000")]).port, 5000);
        }

        #[test]
        fn blank_values_count_as_unset() {
            let s = settings(&[
                ("COMPANIES_DATA_PATH", "  "),
                ("FRONTEND_DIR", ""),
                ("SENTRY_DSN", " "),
            ]);
            assert_eq!(s.data_path, PathBuf::from(DEFAULT_DATA_PATH));
            assert!(s.frontend_dir.is_none());
            assert!(s.sentry_dsn.is_none());
        }
    }
}
