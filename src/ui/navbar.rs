// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every screen.
//!
//! It holds the owner's name, one link per profile section, the link to the
//! photography screen, and the light/dark toggle.

use crate::domain::profile::ProfileSection;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, tooltip, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Highlighted section, `None` while the photography screen is shown.
    pub active_section: Option<ProfileSection>,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectSection(ProfileSection),
    OpenPhotography,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ShowSection(ProfileSection),
    ShowPhotography,
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::SelectSection(section) => Event::ShowSection(section),
        Message::OpenPhotography => Event::ShowPhotography,
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let home = button(Text::new(ctx.i18n.tr("app-name")).size(typography::TITLE_SM))
        .on_press(Message::SelectSection(ProfileSection::About))
        .padding(0)
        .style(styles::button::link(false));

    let links = ProfileSection::ALL
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, section| {
            let active = ctx.active_section == Some(*section);
            row.push(
                button(Text::new(ctx.i18n.tr(section.i18n_key())).size(typography::BODY))
                    .on_press(Message::SelectSection(*section))
                    .padding([spacing::XXS, 0.0])
                    .style(styles::button::link(active)),
            )
        })
        .push(
            button(Text::new(ctx.i18n.tr("nav-photography")).size(typography::BODY))
                .on_press(Message::OpenPhotography)
                .padding([spacing::XXS, 0.0])
                .style(styles::button::link(ctx.active_section.is_none())),
        );

    let row = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::LG])
        .height(sizing::NAVBAR_HEIGHT)
        .align_y(Vertical::Center)
        .push(home)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(theme_toggle(&ctx));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn theme_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let is_dark = ctx.theme_mode.is_dark();
    let (glyph, current, next) = if is_dark {
        ("☾", "theme-dark", "theme-light")
    } else {
        ("☀", "theme-light", "theme-dark")
    };
    let tip = ctx.i18n.tr_with_args(
        "theme-toggle-tooltip",
        &[
            ("current", ctx.i18n.tr(current).as_str()),
            ("next", ctx.i18n.tr(next).as_str()),
        ],
    );

    let toggle = button(Text::new(glyph).size(typography::TITLE_SM))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::unselected);

    styles::tooltip::styled(toggle, tip, tooltip::Position::Bottom).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".into()), &Config::default())
    }

    #[test]
    fn navbar_view_renders_on_profile() {
        let i18n = i18n();
        let _element = view(ViewContext {
            i18n: &i18n,
            active_section: Some(ProfileSection::Projects),
            theme_mode: ThemeMode::Light,
        });
    }

    #[test]
    fn navbar_view_renders_on_photography_in_dark_mode() {
        let i18n = i18n();
        let _element = view(ViewContext {
            i18n: &i18n,
            active_section: None,
            theme_mode: ThemeMode::Dark,
        });
    }

    #[test]
    fn messages_map_to_events() {
        assert_eq!(
            update(Message::SelectSection(ProfileSection::Education)),
            Event::ShowSection(ProfileSection::Education)
        );
        assert_eq!(update(Message::OpenPhotography), Event::ShowPhotography);
        assert_eq!(update(Message::ToggleTheme), Event::ToggleTheme);
    }
}
