mod api;
mod application;
mod domain;
mod infrastructure;
mod ports;

use api::AppState;
use application::PaymentService;
use infrastructure::{AppConfig, RazorpayAdapter};
use ports::PaymentGatewayPort;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载环境变量
    let dotenv = dotenvy::dotenv();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Ok(path) = dotenv {
        info!("Loaded environment variables from {}", path.display());
    }

    info!("Starting Payment Service...");

    let config = AppConfig::from_env()?;

    // 创建 Razorpay 适配器，凭证无效时按配置决定是否拒绝启动
    let gateway = match RazorpayAdapter::new(&config.razorpay) {
        Ok(adapter) => {
            info!("Razorpay configuration loaded for key: {}", adapter.key_id());
            Some(Arc::new(adapter))
        }
        Err(e) if config.require_gateway_credentials => return Err(e.into()),
        Err(e) => {
            warn!("{}; /create-order will fail until credentials are provided", e);
            None
        }
    };

    let signing_secret = match config.razorpay.signing_secret() {
        Ok(secret) => Some(secret.to_string()),
        Err(e) => {
            warn!("{}; /verify-payment will fail until it is provided", e);
            None
        }
    };

    // 创建支付服务
    let payment_service = Arc::new(PaymentService::new(gateway, signing_secret));

    // 创建应用状态
    let app_state = AppState { payment_service };

    // 创建路由
    let app = api::create_router(app_state);

    let addr = config.listen_addr();
    info!("Server listening on {}", addr);
    info!("Available endpoints:");
    info!("  GET  /               - Liveness");
    info!("  GET  /health         - Health check");
    info!("  POST /create-order   - Create order");
    info!("  POST /verify-payment - Verify payment signature");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;

    Ok(())
}

