use leptos::*;

use crate::api::{ApiClient, ApiError, Notification};

/// Local copy of the notification list. The unread count is always derived
/// from the entries held here, never from a server-reported count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> u32 {
        self.items.iter().filter(|n| !n.is_read).count() as u32
    }

    /// Returns whether an entry changed.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(entry) if !entry.is_read => {
                entry.is_read = true;
                true
            }
            _ => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for entry in &mut self.items {
            entry.is_read = true;
        }
    }
}

pub async fn fetch_unread_count(api: &ApiClient) -> Result<u32, ApiError> {
    api.get_unread_count().await.map(|c| c.count)
}

pub async fn fetch_feed(api: &ApiClient) -> Result<NotificationFeed, ApiError> {
    api.list_notifications().await.map(NotificationFeed::new)
}

/// Bell badge, dropdown list and read-state actions shared by the header.
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    api: StoredValue<ApiClient>,
    pub unread_count: RwSignal<u32>,
    pub feed: RwSignal<NotificationFeed>,
    pub open: RwSignal<bool>,
    pub loading: RwSignal<bool>,
}

impl NotificationCenter {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api: store_value(api),
            unread_count: create_rw_signal(0),
            feed: create_rw_signal(NotificationFeed::default()),
            open: create_rw_signal(false),
            loading: create_rw_signal(false),
        }
    }

    /// Polls the unread count until the owning component is cleaned up.
    /// Browser only; server renders show the initial badge.
    pub fn start_polling(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            use std::{cell::Cell, rc::Rc};

            let alive = Rc::new(Cell::new(true));
            {
                let alive = alive.clone();
                on_cleanup(move || alive.set(false));
            }
            let api = self.api.get_value();
            let unread = self.unread_count;
            spawn_local(async move {
                while alive.get() {
                    match fetch_unread_count(&api).await {
                        Ok(count) => unread.set(count),
                        Err(err) => log::error!("Failed to fetch unread count: {}", err),
                    }
                    gloo_timers::future::TimeoutFuture::new(
                        crate::config::UNREAD_POLL_INTERVAL_MS,
                    )
                    .await;
                }
            });
        }
    }

    pub fn toggle(&self) {
        let opening = !self.open.get_untracked();
        self.open.set(opening);
        if opening {
            self.load_feed();
        }
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    fn load_feed(&self) {
        let api = self.api.get_value();
        let feed = self.feed;
        let unread = self.unread_count;
        let loading = self.loading;
        loading.set(true);
        spawn_local(async move {
            match fetch_feed(&api).await {
                Ok(fresh) => {
                    unread.set(fresh.unread_count());
                    feed.set(fresh);
                }
                Err(err) => log::error!("Failed to fetch notifications: {}", err),
            }
            loading.set(false);
        });
    }

    /// Flips the entry locally, then tells the server. A failed request is
    /// logged only; the next poll brings the badge back in line.
    pub fn mark_read(&self, id: String) {
        self.apply_mark_read(&id);
        let api = self.api.get_value();
        spawn_local(async move {
            if let Err(err) = api.mark_notification_read(&id).await {
                log::error!("Failed to mark notification {} as read: {}", id, err);
            }
        });
    }

    pub fn mark_all_read(&self) {
        self.apply_mark_all_read();
        let api = self.api.get_value();
        spawn_local(async move {
            if let Err(err) = api.mark_all_notifications_read().await {
                log::error!("Failed to mark all notifications as read: {}", err);
            }
        });
    }

    pub(crate) fn apply_mark_read(&self, id: &str) {
        let mut count = 0;
        self.feed.update(|feed| {
            feed.mark_read(id);
            count = feed.unread_count();
        });
        self.unread_count.set(count);
    }

    pub(crate) fn apply_mark_all_read(&self) {
        self.feed.update(NotificationFeed::mark_all_read);
        self.unread_count.set(0);
    }
}

pub fn provide_notification_center(api: ApiClient) -> NotificationCenter {
    let center = NotificationCenter::new(api);
    provide_context(center);
    center
}

pub fn use_notification_center() -> NotificationCenter {
    match use_context::<NotificationCenter>() {
        Some(center) => center,
        None => provide_notification_center(
            use_context::<ApiClient>().unwrap_or_else(ApiClient::new),
        ),
    }
}
