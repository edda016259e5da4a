pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use center::Center;
use left::{Left, Sidebar};
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +--------------------------------+
/// |           TopHeader            |
/// +--------------------------------+
/// |  Sidebar  |  Tab bar + pages   |
/// +--------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Left>
                    <Sidebar />
                </Left>
                <div class="app-main">
                    <Center />
                </div>
            </div>
        </div>
    }
}
