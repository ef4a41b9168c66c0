use std::sync::Arc;
use std::time::Duration;

use shared::AppResult;
use uuid::Uuid;

use crate::catalog::{BrandCatalog, Fixtures};
use crate::core::{Config, Result, ServerError};
use crate::session::{PendingGuard, RouteTable, Session, SessionStore, SimulatedOp, simulate};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一份。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | BrandCatalog | 品牌目录 (内存) |
/// | sessions | SessionStore | 会话表 |
/// | routes | Arc<RouteTable> | 视图路由表 (启动时校验) |
/// | fixtures | Arc<Fixtures> | 种子数据 (只读列表) |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 品牌目录
    pub catalog: BrandCatalog,
    /// 会话表
    pub sessions: SessionStore,
    /// 视图路由表
    pub routes: Arc<RouteTable>,
    /// 种子数据
    pub fixtures: Arc<Fixtures>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 解析内嵌种子数据
    /// 2. 构建品牌目录
    /// 3. 构建并校验路由表
    pub fn initialize(config: &Config) -> Result<Self> {
        let fixtures = Fixtures::load()?;
        let catalog = BrandCatalog::new(fixtures.brands.clone())
            .map_err(|e| ServerError::Config(e.message))?;

        let routes = RouteTable::new();
        routes.validate()?;

        let sessions = SessionStore::new(config.session_idle_timeout());

        tracing::info!(
            brands = catalog.get_all().len(),
            latency_scale = config.simulated_latency_scale,
            "Server state initialized"
        );

        Ok(Self {
            config: config.clone(),
            catalog,
            sessions,
            routes: Arc::new(routes),
            fixtures: Arc::new(fixtures),
        })
    }

    /// 新匿名会话，聚焦目录中第一个品牌
    pub fn new_session(&self) -> Session {
        Session::anonymous(self.catalog.first_id().unwrap_or_default())
    }

    /// 某个模拟操作的实际延迟 (已按配置缩放)
    pub fn delay(&self, op: SimulatedOp) -> Duration {
        self.config.scaled_delay(op.base_delay_ms())
    }

    /// 标记会话操作进行中并等待模拟延迟
    ///
    /// 返回的 guard 由调用方 `commit` / `finish`；登出会让等待提前以
    /// `OperationCancelled` 结束。
    pub async fn run_simulated(&self, session_id: Uuid, op: SimulatedOp) -> AppResult<PendingGuard> {
        let guard = self.sessions.begin(session_id, op)?;
        simulate(guard.token(), op, self.delay(op)).await?;
        Ok(guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_from_fixtures() {
        let state = ServerState::initialize(&Config::with_overrides(0, 0.0)).unwrap();
        assert_eq!(state.new_session().focused_brand_id, "b1");
        assert_eq!(state.delay(SimulatedOp::Payouts), Duration::ZERO);
        assert!(state.sessions.is_empty());
    }
}
