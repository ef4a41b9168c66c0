//! Campaign API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::loyalty::{AVAILABLE_INTERESTS, AudienceFilter, BASE_AUDIENCE, estimate_audience};
use shared::models::Role;
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::api::CurrentSession;
use crate::core::ServerState;
use crate::session::SimulatedOp;
use crate::utils::validation::MAX_NOTE_LEN;

pub const DEFAULT_TEMPLATE: &str = "Hi {{name}}! We noticed you love {{interest}}. Enjoy a special 20% discount this weekend at Nine Blue! 🥂";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    #[default]
    Whatsapp,
    Sms,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Whatsapp, Channel::Sms];
}

#[derive(Debug, Serialize)]
pub struct Interest {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerDefaults {
    pub template: &'static str,
    pub channels: [Channel; 2],
    pub interests: Vec<Interest>,
    pub base_audience: u64,
}

/// GET /api/campaigns/composer - 编辑器默认值
pub async fn composer(current: CurrentSession) -> AppResult<Json<ComposerDefaults>> {
    current.session.require_role(&[Role::SuperAdmin])?;
    Ok(Json(ComposerDefaults {
        template: DEFAULT_TEMPLATE,
        channels: Channel::ALL,
        interests: AVAILABLE_INTERESTS
            .iter()
            .map(|&(id, label)| Interest { id, label })
            .collect(),
        base_audience: BASE_AUDIENCE,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCampaignRequest {
    #[serde(default)]
    pub channel: Channel,
    pub message: String,
    #[serde(default)]
    pub audience: AudienceFilter,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignReceipt {
    pub channel: Channel,
    pub recipients: u64,
}

/// POST /api/campaigns/send - 发送营销活动
pub async fn send(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(req): Json<SendCampaignRequest>,
) -> AppResult<Json<ApiResponse<CampaignReceipt>>> {
    current.session.require_role(&[Role::SuperAdmin])?;
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::new(ErrorCode::CampaignMessageEmpty));
    }
    if message.chars().count() > MAX_NOTE_LEN {
        return Err(AppError::validation(format!(
            "message is too long (max {} chars)",
            MAX_NOTE_LEN
        ))
        .with_detail("field", "message"));
    }
    let recipients = estimate_audience(&req.audience);
    if recipients == 0 {
        return Err(AppError::new(ErrorCode::CampaignAudienceEmpty));
    }

    let guard = state
        .run_simulated(current.id, SimulatedOp::CampaignSend)
        .await?;
    guard.finish()?;

    tracing::info!(
        session_id = %current.id,
        channel = ?req.channel,
        recipients,
        "Campaign sent"
    );
    Ok(Json(ApiResponse::success_with_message(
        format!("Campaign sent to {} users", recipients),
        CampaignReceipt {
            channel: req.channel,
            recipients,
        },
    )))
}
