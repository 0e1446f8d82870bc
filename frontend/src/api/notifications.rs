use super::{
    client::{segment, ApiClient},
    types::{ApiError, MessageResponse, Notification, UnreadCount},
};

impl ApiClient {
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get_json("/notifications/").await
    }

    pub async fn get_unread_count(&self) -> Result<UnreadCount, ApiError> {
        self.get_json("/notifications/unread/count").await
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.put_json(&format!("/notifications/{}/read", segment(id)))
            .await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<MessageResponse, ApiError> {
        self.put_json("/notifications/read-all").await
    }
}
