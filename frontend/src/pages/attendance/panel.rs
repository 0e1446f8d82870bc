use leptos::*;

use super::{
    components::{AttendanceToolbar, RosterTable},
    view_model::use_attendance_view_model,
};
use crate::components::{error::InlineErrorMessage, layout::Layout};

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <Layout title="Attendance">
            <AttendancePanel />
        </Layout>
    }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    view! {
        <div class="space-y-6">
            <AttendanceToolbar vm=vm />
            <InlineErrorMessage error=vm.load_error.into() />
            <RosterTable vm=vm />
        </div>
    }
}
