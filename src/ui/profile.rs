// SPDX-License-Identifier: MPL-2.0
//! Profile screen: hero block followed by the selected sections.
//!
//! All content comes from [`crate::catalog`]. The screen has no state of its
//! own and emits no messages; links are shown as text next to their label.

use crate::catalog;
use crate::domain::profile::{
    Certification, Education, Experience, Presentation, ProfileSection, Project, Publication,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{rule, scrollable, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the profile screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub section: ProfileSection,
}

/// Render the profile screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let sections = ProfileSection::CONTENT
        .iter()
        .filter(|section| ctx.section.shows(**section))
        .map(|section| build_section(&ctx, *section));

    let content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(build_hero(&ctx))
        .extend(sections)
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("profile-footer", &[("name", catalog::PROFILE.name)]),
            )
            .size(typography::CAPTION),
        );

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

fn build_hero<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let profile = &catalog::PROFILE;

    let contacts = Column::new()
        .spacing(spacing::XXS)
        .push(build_link_item(ctx.i18n.tr("profile-email"), profile.email))
        .push(build_link_item(ctx.i18n.tr("profile-github"), profile.github))
        .push(build_link_item(ctx.i18n.tr("profile-linkedin"), profile.linkedin))
        .push(build_link_item(ctx.i18n.tr("profile-download-cv"), profile.cv));

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(profile.name).size(typography::DISPLAY))
        .push(Text::new(profile.title).size(typography::TITLE_MD))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(Text::new(profile.location).size(typography::BODY))
                .push(Text::new("•").size(typography::BODY))
                .push(Text::new(ctx.i18n.tr("profile-status")).size(typography::BODY)),
        )
        .push(Text::new(profile.short_bio).size(typography::BODY_LG))
        .push(contacts)
        .into()
}

fn build_section<'a, Message: 'a>(
    ctx: &ViewContext<'a>,
    section: ProfileSection,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let entries: Vec<Element<'a, Message>> = match section {
        ProfileSection::Experience => catalog::EXPERIENCE.iter().map(experience_card).collect(),
        ProfileSection::Education => catalog::EDUCATION.iter().map(education_card).collect(),
        ProfileSection::Projects => catalog::PROJECTS.iter().map(project_card).collect(),
        ProfileSection::Publications => catalog::PUBLICATIONS
            .iter()
            .map(|entry| publication_card(i18n, entry))
            .collect(),
        ProfileSection::Presentations => catalog::PRESENTATIONS
            .iter()
            .map(|entry| presentation_card(i18n, entry))
            .collect(),
        ProfileSection::Certifications => catalog::CERTIFICATIONS
            .iter()
            .map(|entry| certification_card(i18n, entry))
            .collect(),
        // The hero already covers it.
        ProfileSection::About => Vec::new(),
    };

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr(section.i18n_key())).size(typography::TITLE_LG))
        .push(rule::horizontal(1))
        .extend(entries)
        .into()
}

fn experience_card<'a, Message: 'a>(entry: &'a Experience) -> Element<'a, Message> {
    card(
        Column::new()
            .spacing(spacing::XXS)
            .push(heading_row(entry.role, entry.period))
            .push(Text::new(entry.organization).size(typography::BODY))
            .push(Text::new(entry.description).size(typography::BODY_SM)),
    )
}

fn education_card<'a, Message: 'a>(entry: &'a Education) -> Element<'a, Message> {
    card(
        Column::new()
            .spacing(spacing::XXS)
            .push(heading_row(entry.degree, entry.period))
            .push(Text::new(entry.institution).size(typography::BODY)),
    )
}

fn project_card<'a, Message: 'a>(entry: &'a Project) -> Element<'a, Message> {
    card(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(entry.title).size(typography::TITLE_SM))
            .push(Text::new(entry.description).size(typography::BODY_SM)),
    )
}

fn publication_card<'a, Message: 'a>(
    i18n: &I18n,
    entry: &'a Publication,
) -> Element<'a, Message> {
    card(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(entry.title).size(typography::TITLE_SM))
            .push(Text::new(format!("{} ({})", entry.venue, entry.year)).size(typography::BODY))
            .push(build_link_item(i18n.tr("profile-link-pdf"), entry.link)),
    )
}

fn presentation_card<'a, Message: 'a>(
    i18n: &I18n,
    entry: &'a Presentation,
) -> Element<'a, Message> {
    card(
        Column::new()
            .spacing(spacing::XXS)
            .push(heading_row(entry.title, entry.date))
            .push(
                Text::new(format!("{}, {}", entry.event, entry.location)).size(typography::BODY),
            )
            .push(build_link_item(i18n.tr("profile-link-pdf"), entry.link)),
    )
}

fn certification_card<'a, Message: 'a>(
    i18n: &I18n,
    entry: &'a Certification,
) -> Element<'a, Message> {
    let dates = i18n.tr_with_args(
        "profile-certification-dates",
        &[("issued", entry.issued), ("expires", entry.expires)],
    );

    card(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(Text::new(entry.badge).size(typography::TITLE_LG))
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(entry.title).size(typography::TITLE_SM))
                    .push(Text::new(entry.issuer).size(typography::BODY))
                    .push(Text::new(dates).size(typography::CAPTION))
                    .push(build_link_item(i18n.tr("profile-link-view"), entry.link)),
            ),
    )
}

/// Title on the left, date range on the right.
fn heading_row<'a, Message: 'a>(title: &'a str, period: &'a str) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(title).size(typography::TITLE_SM).width(Length::Fill))
        .push(Text::new(period).size(typography::CAPTION))
}

fn build_link_item<'a, Message: 'a>(label: String, url: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(Text::new(format!("{label}:")).size(typography::BODY_SM))
        .push(Text::new(url).size(typography::BODY_SM))
        .into()
}

fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn every_section_renders() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        for section in ProfileSection::ALL {
            let _element: Element<'_, ()> = view(ViewContext {
                i18n: &i18n,
                section,
            });
        }
    }
}
