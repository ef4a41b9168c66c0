//! Session API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::{Role, User, UserProfileUpdate, WalletSummary};
use shared::navigation::{NavItem, Screen, View};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};
use uuid::Uuid;
use validator::Validate;

use crate::api::CurrentSession;
use crate::core::ServerState;
use crate::security_log;
use crate::session::credentials::{self, SignupRequest};
use crate::session::{OtpChallenge, Session, SessionAction, SimulatedOp, simulate};
use crate::utils::validate_request;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};

/// Session snapshot returned by every session endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: Uuid,
    pub session: Session,
    pub screen: Screen,
}

fn session_view(state: &ServerState, id: Uuid, session: Session) -> AppResult<SessionView> {
    let screen = state.routes.resolve(&session, &state.catalog)?;
    Ok(SessionView {
        session_id: id,
        session,
        screen,
    })
}

/// Identity a successful login binds to: the first seeded user with `role`
fn seeded_identity(state: &ServerState, role: Role) -> AppResult<(User, Option<WalletSummary>)> {
    let user = state
        .fixtures
        .user_for_role(role)
        .cloned()
        .ok_or_else(|| AppError::internal(format!("No seeded user for role {}", role)))?;
    let wallet = (role == Role::Customer).then_some(state.fixtures.records.wallet);
    Ok((user, wallet))
}

fn reject_if_authenticated(session: &Session) -> AppResult<()> {
    if session.is_authenticated() {
        return Err(AppError::new(ErrorCode::AlreadyAuthenticated));
    }
    Ok(())
}

// =============================================================================
// Lifecycle
// =============================================================================

/// POST /api/session - 新建匿名会话
pub async fn create(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<SessionView>>> {
    let session = state.new_session();
    let id = state.sessions.create(session.clone());
    Ok(Json(ApiResponse::success(session_view(&state, id, session)?)))
}

/// GET /api/session - 当前会话
pub async fn current(
    State(state): State<ServerState>,
    current: CurrentSession,
) -> AppResult<Json<ApiResponse<SessionView>>> {
    Ok(Json(ApiResponse::success(session_view(
        &state,
        current.id,
        current.session,
    )?)))
}

/// GET /api/session/screen - 解析当前屏幕
pub async fn screen(
    State(state): State<ServerState>,
    current: CurrentSession,
) -> AppResult<Json<ApiResponse<Screen>>> {
    let screen = state.routes.resolve(&current.session, &state.catalog)?;
    Ok(Json(ApiResponse::success(screen)))
}

/// GET /api/session/menu - 侧边栏菜单 (匿名为空)
pub async fn menu(
    State(state): State<ServerState>,
    current: CurrentSession,
) -> AppResult<Json<ApiResponse<Vec<NavItem>>>> {
    let items = current
        .session
        .role()
        .map(|role| state.routes.menu(role).to_vec())
        .unwrap_or_default();
    Ok(Json(ApiResponse::success(items)))
}

/// POST /api/session/logout - 登出并取消进行中的操作
pub async fn logout(
    State(state): State<ServerState>,
    current: CurrentSession,
) -> AppResult<Json<ApiResponse<SessionView>>> {
    let user_id = current.session.identity.as_ref().map(|u| u.id.clone());
    let session = state.sessions.logout(current.id)?;
    security_log!(
        "INFO",
        "logout",
        session_id = current.id.to_string(),
        user_id = user_id.unwrap_or_default()
    );
    Ok(Json(ApiResponse::success(session_view(
        &state, current.id, session,
    )?)))
}

// =============================================================================
// Login
// =============================================================================

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PasswordLoginRequest {
    pub role: Role,
    #[validate(length(min = 1, message = "Login ID is required"))]
    pub login_id: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// POST /api/session/login/password - 账号密码登录
///
/// 凭据校验 (1000ms) 之后再模拟登录 (600ms)。
pub async fn login_password(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(req): Json<PasswordLoginRequest>,
) -> AppResult<Json<ApiResponse<SessionView>>> {
    validate_request(&req)?;
    validate_required_text(&req.login_id, "loginId", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&req.password, "password", MAX_PASSWORD_LEN)?;
    reject_if_authenticated(&current.session)?;

    let guard = state.sessions.begin(current.id, SimulatedOp::Login)?;
    simulate(
        guard.token(),
        SimulatedOp::CredentialCheck,
        state.delay(SimulatedOp::CredentialCheck),
    )
    .await?;

    if let Err(e) = credentials::check_password(req.role, &req.login_id, &req.password) {
        security_log!(
            "WARN",
            "login_failed",
            session_id = current.id.to_string(),
            role = req.role.as_str(),
            login_id = req.login_id.trim().to_string()
        );
        return Err(e);
    }

    simulate(guard.token(), SimulatedOp::Login, state.delay(SimulatedOp::Login)).await?;

    let (user, wallet) = seeded_identity(&state, req.role)?;
    let user_id = user.id.clone();
    let session = guard.commit(SessionAction::Login { user, wallet })?;

    security_log!(
        "INFO",
        "login_success",
        session_id = current.id.to_string(),
        user_id = user_id
    );
    Ok(Json(ApiResponse::success(session_view(
        &state, current.id, session,
    )?)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    pub role: Role,
    pub phone: String,
}

/// POST /api/session/login/otp/send - 发送 OTP
pub async fn send_otp(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(req): Json<SendOtpRequest>,
) -> AppResult<Json<ApiResponse<SessionView>>> {
    reject_if_authenticated(&current.session)?;
    let phone = credentials::normalize_phone(&req.phone)?;

    let guard = state.run_simulated(current.id, SimulatedOp::OtpSend).await?;
    let session = guard.commit(SessionAction::OtpSent(OtpChallenge {
        phone,
        role: req.role,
    }))?;

    tracing::info!(session_id = %current.id, role = %req.role, "OTP sent");
    Ok(Json(ApiResponse::success_with_message(
        "OTP sent",
        session_view(&state, current.id, session)?,
    )))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub code: String,
}

/// POST /api/session/login/otp/verify - 校验 OTP 并登录
pub async fn verify_otp(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(req): Json<VerifyOtpRequest>,
) -> AppResult<Json<ApiResponse<SessionView>>> {
    reject_if_authenticated(&current.session)?;
    let challenge = current
        .session
        .otp
        .clone()
        .ok_or_else(|| AppError::new(ErrorCode::OtpNotRequested))?;

    let guard = state.run_simulated(current.id, SimulatedOp::OtpVerify).await?;

    if let Err(e) = credentials::check_otp(&req.code) {
        security_log!(
            "WARN",
            "otp_failed",
            session_id = current.id.to_string(),
            phone = challenge.phone.clone()
        );
        return Err(e);
    }

    let (user, wallet) = seeded_identity(&state, challenge.role)?;
    let session = guard.commit(SessionAction::Login { user, wallet })?;

    security_log!(
        "INFO",
        "otp_login_success",
        session_id = current.id.to_string(),
        phone = challenge.phone
    );
    Ok(Json(ApiResponse::success(session_view(
        &state, current.id, session,
    )?)))
}

/// POST /api/session/signup - 注册新会员并登录
pub async fn signup(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(req): Json<SignupRequest>,
) -> AppResult<Json<ApiResponse<SessionView>>> {
    validate_request(&req)?;
    req.check_limits()?;
    reject_if_authenticated(&current.session)?;

    let guard = state.run_simulated(current.id, SimulatedOp::Signup).await?;

    let user = req.into_user();
    let user_id = user.id.clone();
    let wallet = WalletSummary {
        balance: 0.0,
        bonus_balance: 0.0,
        points: 0,
    };
    let session = guard.commit(SessionAction::Login {
        user,
        wallet: Some(wallet),
    })?;

    tracing::info!(session_id = %current.id, user_id = %user_id, "Member signed up");
    Ok(Json(ApiResponse::success_with_message(
        "Welcome aboard",
        session_view(&state, current.id, session)?,
    )))
}

// =============================================================================
// Navigation
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub view: View,
}

/// POST /api/session/navigate - 切换视图
///
/// 未知视图同样接受，屏幕解析会回落到 "建设中" 占位。
pub async fn navigate(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(req): Json<NavigateRequest>,
) -> AppResult<Json<ApiResponse<SessionView>>> {
    let session = state
        .sessions
        .apply(current.id, SessionAction::Navigate(req.view))?;
    Ok(Json(ApiResponse::success(session_view(
        &state, current.id, session,
    )?)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandTargetRequest {
    pub brand_id: String,
}

/// POST /api/session/edit-landing-page - 聚焦品牌并打开编辑器 (一次原子写入)
pub async fn edit_landing_page(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(req): Json<BrandTargetRequest>,
) -> AppResult<Json<ApiResponse<SessionView>>> {
    if !state.catalog.contains(&req.brand_id) {
        return Err(AppError::brand_not_found(&req.brand_id));
    }
    let session = state.sessions.apply(
        current.id,
        SessionAction::EditLandingPage {
            brand_id: req.brand_id,
        },
    )?;
    Ok(Json(ApiResponse::success(session_view(
        &state, current.id, session,
    )?)))
}

/// POST /api/session/focus - 切换聚焦品牌
pub async fn focus(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(req): Json<BrandTargetRequest>,
) -> AppResult<Json<ApiResponse<SessionView>>> {
    if !state.catalog.contains(&req.brand_id) {
        return Err(AppError::brand_not_found(&req.brand_id));
    }
    let session = state.sessions.apply(
        current.id,
        SessionAction::FocusBrand {
            brand_id: req.brand_id,
        },
    )?;
    Ok(Json(ApiResponse::success(session_view(
        &state, current.id, session,
    )?)))
}

/// PUT /api/session/profile - 保存个人资料
pub async fn update_profile(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(update): Json<UserProfileUpdate>,
) -> AppResult<Json<ApiResponse<SessionView>>> {
    current.session.require_identity()?;
    if let Some(mobile) = &update.mobile {
        credentials::normalize_phone(mobile)?;
    }
    validate_optional_text(&update.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&update.email, "email", MAX_EMAIL_LEN)?;

    let guard = state.run_simulated(current.id, SimulatedOp::ProfileSave).await?;
    let session = guard.commit(SessionAction::UpdateProfile(update))?;

    Ok(Json(ApiResponse::success_with_message(
        "Profile saved",
        session_view(&state, current.id, session)?,
    )))
}
