use actix_web::{App, HttpResponse, HttpServer, middleware::Logger, web};
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use earnzy_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    external::FcmService,
    handlers,
    middlewares::{AuthMiddleware, create_cors},
    services::*,
    swagger::swagger_config,
    utils::JwtService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 创建数据库连接池
    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    // 运行数据库迁移
    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // 创建JWT服务
    let jwt_service = JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expires_in,
        config.jwt.refresh_token_expires_in,
    );

    // 创建外部服务
    let fcm_service = FcmService::new(config.fcm.clone());

    // 创建服务
    let ledger_service = LedgerService::new(pool.clone());
    let auto_ban_service = AutoBanService::new(pool.clone());
    let auth_service = AuthService::new(
        pool.clone(),
        jwt_service.clone(),
        ledger_service.clone(),
        config.rewards.clone(),
    );
    let user_service = UserService::new(pool.clone());
    let claim_service = ClaimService::new(
        pool.clone(),
        ledger_service.clone(),
        auto_ban_service.clone(),
        config.rewards.clone(),
    );
    let task_service = TaskService::new(
        pool.clone(),
        ledger_service.clone(),
        auto_ban_service.clone(),
    );
    let offer_service = OfferService::new(pool.clone());
    let banner_service = BannerService::new(pool.clone());
    let achievement_service = AchievementService::new(pool.clone());
    let promo_code_service = PromoCodeService::new(
        pool.clone(),
        ledger_service.clone(),
        auto_ban_service.clone(),
    );
    let withdrawal_service = WithdrawalService::new(
        pool.clone(),
        ledger_service.clone(),
        config.rewards.clone(),
    );
    let referral_service = ReferralService::new(pool.clone());
    let support_service = SupportService::new(pool.clone());
    let notification_service = NotificationService::new(pool.clone(), fcm_service.clone());
    let stats_service = StatsService::new(pool.clone());

    // 引导创建初始管理员
    auth_service
        .bootstrap_admin(&config.admin.email, &config.admin.password)
        .await
        .expect("Failed to bootstrap admin account");

    // 启动自动封禁巡检任务（每 10 分钟一轮）
    {
        let auto_ban = auto_ban_service.clone();
        tokio::spawn(async move {
            loop {
                if let Err(e) = auto_ban.sweep().await {
                    log::error!("Auto-ban sweep failed: {e:?}");
                }
                tokio::time::sleep(std::time::Duration::from_secs(600)).await;
            }
        });
    }

    // 启动HTTP服务器
    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(AuthMiddleware::new(jwt_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(ledger_service.clone()))
            .app_data(web::Data::new(claim_service.clone()))
            .app_data(web::Data::new(task_service.clone()))
            .app_data(web::Data::new(offer_service.clone()))
            .app_data(web::Data::new(banner_service.clone()))
            .app_data(web::Data::new(achievement_service.clone()))
            .app_data(web::Data::new(promo_code_service.clone()))
            .app_data(web::Data::new(withdrawal_service.clone()))
            .app_data(web::Data::new(referral_service.clone()))
            .app_data(web::Data::new(support_service.clone()))
            .app_data(web::Data::new(notification_service.clone()))
            .app_data(web::Data::new(auto_ban_service.clone()))
            .app_data(web::Data::new(stats_service.clone()))
            .configure(swagger_config)
            .route(
                "/health",
                web::get().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
                }),
            )
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/admin")
                            .configure(handlers::admin_user_config)
                            .configure(handlers::admin_wallet_config)
                            .configure(handlers::admin_task_config)
                            .configure(handlers::admin_offer_config)
                            .configure(handlers::admin_banner_config)
                            .configure(handlers::admin_achievement_config)
                            .configure(handlers::admin_promo_config)
                            .configure(handlers::admin_withdrawal_config)
                            .configure(handlers::admin_referral_config)
                            .configure(handlers::admin_support_config)
                            .configure(handlers::admin_config),
                    )
                    .configure(handlers::auth_config)
                    .configure(handlers::user_config)
                    .configure(handlers::wallet_config)
                    .configure(handlers::task_config)
                    .configure(handlers::offer_config)
                    .configure(handlers::banner_config)
                    .configure(handlers::achievement_config)
                    .configure(handlers::promo_config)
                    .configure(handlers::claim_config)
                    .configure(handlers::withdrawal_config)
                    .configure(handlers::referral_config)
                    .configure(handlers::support_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
