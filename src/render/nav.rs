use maud::html;

use crate::pager::{PaginationState, Paginator};

pub const DEFAULT_CLASS: &str = "justify-content-center";

/// One anchor of the pager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub page: u64,
    pub text: String,
    pub aria_label: String,
    pub title: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link(PageLink),
    /// Active marker for the current page, never a link.
    Current(u64),
}

impl maud::Render for PageLink {
    fn render(&self) -> maud::Markup {
        html! {
            li.page-item {
                a.page-link aria-label=(&self.aria_label) title=(&self.title) href=(&self.href) { (&self.text) }
            }
        }
    }
}

impl maud::Render for NavItem {
    fn render(&self) -> maud::Markup {
        match self {
            NavItem::Link(link) => link.render(),
            NavItem::Current(page) => html! {
                li.page-item.active aria-current="page" {
                    a.page-link { (page) }
                }
            },
        }
    }
}

/// Link window of a computed [`PaginationState`].
pub struct Nav<'a> {
    paginator: &'a Paginator,
    state: &'a PaginationState,
}

impl Paginator {
    pub fn nav<'a>(&'a self, state: &'a PaginationState) -> Nav<'a> {
        Nav {
            paginator: self,
            state,
        }
    }
}

impl<'a> Nav<'a> {
    fn href(&self, page: u64) -> String {
        format!(
            "{}{}{}{}",
            self.paginator.config().link_base,
            page,
            self.state.hash().unwrap_or_default(),
            self.state.params()
        )
    }

    fn numbered(&self, page: u64) -> PageLink {
        let label = format!("{} {}", self.paginator.config().title, page);
        PageLink {
            page,
            text: page.to_string(),
            aria_label: label.clone(),
            title: label,
            href: self.href(page),
        }
    }

    /// Jump to page one, shown when `fixed` or when not already there.
    pub fn first_page(&self, fixed: bool) -> Option<PageLink> {
        if !fixed && self.state.page() == 1 {
            return None;
        }
        let label = &self.paginator.config().first;
        Some(PageLink {
            page: 1,
            text: label.short.clone(),
            aria_label: label.text.clone(),
            title: label.text.clone(),
            href: self.href(1),
        })
    }

    /// Jump to the last page, shown when `fixed` or when not already there.
    pub fn last_page(&self, fixed: bool) -> Option<PageLink> {
        let pages = self.state.pages();
        if !fixed && self.state.page() == pages {
            return None;
        }
        let label = &self.paginator.config().last;
        Some(PageLink {
            page: pages,
            text: label.short.clone(),
            aria_label: label.text.clone(),
            title: label.text.clone(),
            href: self.href(pages),
        })
    }

    pub fn before_pages(&self) -> Vec<PageLink> {
        let page = self.state.page();
        let start = page.saturating_sub(self.state.range()).max(1);
        (start..page).map(|i| self.numbered(i)).collect()
    }

    pub fn after_pages(&self) -> Vec<PageLink> {
        let page = self.state.page();
        let end = page
            .saturating_add(self.state.range())
            .min(self.state.pages());
        (page + 1..=end).map(|i| self.numbered(i)).collect()
    }

    /// Everything the pager shows, in display order. Empty when all rows fit
    /// on one page.
    pub fn links(&self, fixed: bool) -> Vec<NavItem> {
        if !self.state.is_paginated() {
            return Vec::new();
        }

        self.first_page(fixed)
            .into_iter()
            .chain(self.before_pages())
            .map(NavItem::Link)
            .chain(std::iter::once(NavItem::Current(self.state.page())))
            .chain(
                self.after_pages()
                    .into_iter()
                    .chain(self.last_page(fixed))
                    .map(NavItem::Link),
            )
            .collect()
    }

    pub fn render(&self, class: &str, fixed: bool) -> Option<maud::Markup> {
        if !self.state.is_paginated() {
            return None;
        }

        Some(html! {
            nav {
                ul class=(format!("pagination {}", class)) {
                    @for item in self.links(fixed) {
                        (item)
                    }
                }
            }
        })
    }
}
