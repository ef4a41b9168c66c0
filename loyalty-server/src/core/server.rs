//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::net::SocketAddr;
use std::time::Duration;

use crate::core::tasks::BackgroundTasks;
use crate::core::{Config, Result, ServerState};

/// 空闲会话扫描间隔
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (shared with in-process callers)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> Result<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config)?,
        };

        let mut tasks = BackgroundTasks::new();
        tasks.spawn_session_sweeper(state.sessions.clone(), SWEEP_INTERVAL);
        tasks.log_summary();

        let app = crate::api::build_app(&state).with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            "Loyalty server listening on http://{} ({})",
            addr,
            self.config.environment
        );

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        // 取消所有仍在等待的模拟操作
        state.sessions.cancel_all();
        tasks.shutdown().await;

        Ok(())
    }
}
