use super::parsing::{
    env_optional, env_or_default, parse_bool, parse_cors_origins, parse_environment, parse_offset,
    parse_u64,
};
use super::types::{
    ApiSettings, ConfigError, CorsSettings, ExamSettings, RuntimeSettings, ServerHost, ServerPort,
    ServerSettings, Settings, TelemetrySettings,
};

impl Settings {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let host = env_or_default("DEMS_HOST", "0.0.0.0");
        let port = env_or_default("DEMS_PORT", "8000");

        let environment =
            parse_environment(env_optional("DEMS_ENV").or_else(|| env_optional("ENVIRONMENT")));

        let project_name = env_or_default("PROJECT_NAME", "DEMS Exam Status");
        let version = env_or_default("VERSION", env!("CARGO_PKG_VERSION"));
        let api_v1_str = env_or_default("API_V1_STR", "/api/v1");

        let cors_origins = parse_cors_origins(env_optional("BACKEND_CORS_ORIGINS"))?;

        let display_offset = parse_offset(
            "DEMS_DISPLAY_UTC_OFFSET",
            env_or_default("DEMS_DISPLAY_UTC_OFFSET", "+00:00"),
        )?;
        let poll_interval_seconds = parse_u64(
            "DEMS_POLL_INTERVAL_SECONDS",
            env_or_default("DEMS_POLL_INTERVAL_SECONDS", "1"),
        )?;

        let log_level = env_or_default("DEMS_LOG_LEVEL", "info");
        let json = env_optional("DEMS_LOG_JSON").map(|value| parse_bool(&value)).unwrap_or(false);
        let prometheus_enabled =
            env_optional("PROMETHEUS_ENABLED").map(|value| parse_bool(&value)).unwrap_or(false);

        let settings = Self {
            server: ServerSettings {
                host: ServerHost::parse(host)?,
                port: ServerPort::parse(port)?,
            },
            runtime: RuntimeSettings { environment },
            api: ApiSettings { project_name, version, api_v1_str },
            cors: CorsSettings { origins: cors_origins },
            exam: ExamSettings { display_offset, poll_interval_seconds },
            telemetry: TelemetrySettings { log_level, json, prometheus_enabled },
        };

        settings.validate()?;
        Ok(settings)
    }

    pub(crate) fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host.0, self.server.port.0)
    }

    pub(crate) fn server_host(&self) -> &str {
        &self.server.host.0
    }

    pub(crate) fn server_port(&self) -> u16 {
        self.server.port.0
    }

    pub(crate) fn api(&self) -> &ApiSettings {
        &self.api
    }

    pub(crate) fn cors(&self) -> &CorsSettings {
        &self.cors
    }

    pub(crate) fn exam(&self) -> &ExamSettings {
        &self.exam
    }

    pub(crate) fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    pub(crate) fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.exam.poll_interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "DEMS_POLL_INTERVAL_SECONDS",
                value: "0".to_string(),
            });
        }

        if !self.api.api_v1_str.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "API_V1_STR",
                value: self.api.api_v1_str.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::types::Environment;
    use crate::test_support;

    #[tokio::test]
    async fn loads_defaults() {
        let _guard = test_support::env_lock().await;
        test_support::set_test_env();

        let settings = Settings::load().expect("settings");
        assert_eq!(settings.server_addr(), "0.0.0.0:8000");
        assert_eq!(settings.api().api_v1_str, "/api/v1");
        assert_eq!(settings.exam().poll_interval_seconds, 1);
        assert_eq!(settings.exam().display_offset, time::UtcOffset::UTC);
        assert_eq!(settings.runtime().environment, Environment::Test);
        assert!(!settings.telemetry().prometheus_enabled);
    }

    #[tokio::test]
    async fn reads_display_offset() {
        let _guard = test_support::env_lock().await;
        test_support::set_test_env();
        std::env::set_var("DEMS_DISPLAY_UTC_OFFSET", "+02:00");

        let settings = Settings::load().expect("settings");
        std::env::remove_var("DEMS_DISPLAY_UTC_OFFSET");

        assert_eq!(settings.exam().display_offset.whole_hours(), 2);
    }

    #[tokio::test]
    async fn rejects_zero_poll_interval() {
        let _guard = test_support::env_lock().await;
        test_support::set_test_env();
        std::env::set_var("DEMS_POLL_INTERVAL_SECONDS", "0");

        let result = Settings::load();
        std::env::remove_var("DEMS_POLL_INTERVAL_SECONDS");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "DEMS_POLL_INTERVAL_SECONDS", .. })
        ));
    }

    #[tokio::test]
    async fn rejects_zero_port() {
        let _guard = test_support::env_lock().await;
        test_support::set_test_env();
        std::env::set_var("DEMS_PORT", "0");

        let result = Settings::load();
        std::env::remove_var("DEMS_PORT");

        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
    }
}
