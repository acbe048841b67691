use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
    #[serde(default)]
    pub fcm: FcmConfig,
    #[serde(default)]
    pub rewards: RewardsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expires_in: i64,  // seconds
    pub refresh_token_expires_in: i64, // seconds
}

/// 初始管理员账号（admins 表为空时用于引导创建）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FcmConfig {
    #[serde(default)]
    pub server_key: String,
    #[serde(default = "default_fcm_base_url")]
    pub base_url: String,
}

fn default_fcm_base_url() -> String {
    "https://fcm.googleapis.com".to_string()
}

/// 奖励参数（金币单位）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsConfig {
    pub daily_bonus_base: i64,
    pub referral_bonus: i64,
    pub daily_spins: i64,
    pub daily_scratch_cards: i64,
    pub min_withdrawal: i64,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            daily_bonus_base: 50,
            referral_bonus: 50,
            daily_spins: 5,
            daily_scratch_cards: 3,
            min_withdrawal: 100,
        }
    }
}

impl Config {
    pub fn from_toml() -> anyhow::Result<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 尝试读取配置文件，如果不存在则完全依赖环境变量
        let config_result = std::fs::read_to_string(&config_path);

        let mut config: Config = match config_result {
            Ok(config_str) => {
                // 有配置文件：先解析再用环境变量覆盖
                toml::from_str(&config_str)
                    .with_context(|| format!("Failed to parse config file {config_path}"))?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // 无配置文件：使用环境变量与默认值构建
                fn get_env(name: &str) -> Option<String> {
                    env::var(name).ok()
                }
                fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
                    env::var(name)
                        .ok()
                        .and_then(|v| v.parse::<T>().ok())
                        .unwrap_or(default)
                }

                // 数据库 URL 在无配置文件时必须提供
                let database_url = get_env("DATABASE_URL").context(
                    "Missing DATABASE_URL environment variable and no config.toml found",
                )?;

                Config {
                    server: ServerConfig {
                        host: get_env("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                        port: get_env_parse("SERVER_PORT", 8080u16),
                    },
                    database: DatabaseConfig {
                        url: database_url,
                        max_connections: get_env_parse("DB_MAX_CONNECTIONS", 10u32),
                    },
                    jwt: JwtConfig {
                        secret: get_env("JWT_SECRET")
                            .unwrap_or_else(|| "change-me-in-production".to_string()),
                        access_token_expires_in: get_env_parse("JWT_ACCESS_EXPIRES_IN", 7200i64),
                        refresh_token_expires_in: get_env_parse(
                            "JWT_REFRESH_EXPIRES_IN",
                            2_592_000i64,
                        ),
                    },
                    admin: AdminConfig {
                        email: get_env("ADMIN_EMAIL")
                            .unwrap_or_else(|| "admin@earnzy.app".to_string()),
                        password: get_env("ADMIN_PASSWORD").unwrap_or_default(),
                    },
                    fcm: FcmConfig {
                        server_key: get_env("FCM_SERVER_KEY").unwrap_or_default(),
                        base_url: get_env("FCM_BASE_URL").unwrap_or_else(default_fcm_base_url),
                    },
                    rewards: RewardsConfig {
                        daily_bonus_base: get_env_parse("REWARDS_DAILY_BONUS_BASE", 50i64),
                        referral_bonus: get_env_parse("REWARDS_REFERRAL_BONUS", 50i64),
                        daily_spins: get_env_parse("REWARDS_DAILY_SPINS", 5i64),
                        daily_scratch_cards: get_env_parse("REWARDS_DAILY_SCRATCH_CARDS", 3i64),
                        min_withdrawal: get_env_parse("REWARDS_MIN_WITHDRAWAL", 100i64),
                    },
                }
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read config file {config_path}"));
            }
        };

        // 环境变量覆盖（即便文件存在时也覆盖）
        if let Ok(v) = env::var("SERVER_HOST") {
            config.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            config.server.port = p;
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            config.database.url = v;
        }
        if let Ok(v) = env::var("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            config.database.max_connections = mc;
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            config.jwt.secret = v;
        }
        if let Ok(v) = env::var("JWT_ACCESS_EXPIRES_IN")
            && let Ok(n) = v.parse()
        {
            config.jwt.access_token_expires_in = n;
        }
        if let Ok(v) = env::var("JWT_REFRESH_EXPIRES_IN")
            && let Ok(n) = v.parse()
        {
            config.jwt.refresh_token_expires_in = n;
        }
        if let Ok(v) = env::var("ADMIN_EMAIL") {
            config.admin.email = v;
        }
        if let Ok(v) = env::var("ADMIN_PASSWORD") {
            config.admin.password = v;
        }
        if let Ok(v) = env::var("FCM_SERVER_KEY") {
            config.fcm.server_key = v;
        }
        if let Ok(v) = env::var("FCM_BASE_URL") {
            config.fcm.base_url = v;
        }
        if let Ok(v) = env::var("REWARDS_MIN_WITHDRAWAL")
            && let Ok(n) = v.parse()
        {
            config.rewards.min_withdrawal = n;
        }

        Ok(config)
    }
}
