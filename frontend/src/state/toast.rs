use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn classes(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-emerald-50 border-emerald-200 text-emerald-700",
            ToastKind::Error => "bg-rose-50 border-rose-200 text-rose-700",
            ToastKind::Warning => "bg-amber-50 border-amber-200 text-amber-700",
            ToastKind::Info => "bg-indigo-50 border-indigo-200 text-indigo-700",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Transient notices shown in the corner of every page.
#[derive(Clone, Copy)]
pub struct ToastState {
    queue: RwSignal<ToastQueue>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::default()),
        }
    }

    pub fn push(&self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let mut id = 0;
        let message = message.into();
        self.queue.update(|queue| id = queue.push(message, kind));
        self.schedule_dismiss(id);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(message, ToastKind::Error)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(message, ToastKind::Info)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.push(message, ToastKind::Warning)
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }

    pub fn items(&self) -> Signal<Vec<Toast>> {
        let queue = self.queue;
        Signal::derive(move || queue.with(|q| q.items().to_vec()))
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let state = *self;
        gloo_timers::callback::Timeout::new(crate::config::TOAST_DISMISS_MS, move || {
            state.dismiss(id)
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastState {
    let state = ToastState::new();
    provide_context(state);
    state
}

pub fn use_toasts() -> ToastState {
    match use_context::<ToastState>() {
        Some(state) => state,
        None => provide_toasts(),
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn toast_state_exposes_pushed_items() {
        with_runtime(|| {
            let toasts = ToastState::new();
            let id = toasts.info("Nothing to save");
            let items = toasts.items();
            assert_eq!(items.get_untracked().len(), 1);
            assert_eq!(items.get_untracked()[0].kind, ToastKind::Info);
            toasts.dismiss(id);
            assert!(items.get_untracked().is_empty());
        });
    }
}
