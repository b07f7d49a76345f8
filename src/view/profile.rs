// file: src/view/profile.rs
// description: profile view for the first user returned by the users endpoint

use crate::api::LoadState;
use crate::models::User;
use crate::view::{Route, error_card, loading_card};
use colored::Colorize;

pub struct ProfileView {
    user: LoadState<Option<User>>,
}

impl ProfileView {
    pub fn mount() -> Self {
        Self {
            user: LoadState::Loading,
        }
    }

    pub fn user_mut(&mut self) -> &mut LoadState<Option<User>> {
        &mut self.user
    }

    pub fn back_link() -> String {
        format!("← Back to Dashboard ({})", Route::Dashboard.path())
    }

    pub fn render(&self) -> String {
        match &self.user {
            LoadState::Loading => loading_card("profile"),
            LoadState::Failed(message) => error_card(message),
            LoadState::Loaded(user) => render_profile(user.as_ref()),
        }
    }
}

impl Default for ProfileView {
    fn default() -> Self {
        Self::mount()
    }
}

fn render_profile(user: Option<&User>) -> String {
    let header = format!("{}  {}", "Profile".bold(), ProfileView::back_link());

    let Some(user) = user else {
        return header;
    };

    let muted = |text: String| text.dimmed().to_string();

    [
        header,
        String::new(),
        format!("User ID: {}", user.id).cyan().to_string(),
        format!("{} {}", user.name.bold(), muted(format!("@{}", user.username))),
        muted(format!("{} · {} · {}", user.email, user.phone, user.website)),
        String::new(),
        "Address".bold().to_string(),
        muted(user.address.one_line()),
        String::new(),
        "Company".bold().to_string(),
        muted(user.company.name.clone()),
        muted(user.company.catch_phrase.clone()),
    ]
    .join("\n")
}
