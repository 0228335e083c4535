pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Application frame:
/// ```text
/// +--------------------------+
/// |          Header          |
/// +--------------------------+
/// |          content         |
/// +--------------------------+
/// |    Footer (API status)   |
/// +--------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::header::Header />
            <main class="app-main">
                {children()}
            </main>
            <footer::footer::Footer />
        </div>
    }
}
