use maud::html;

use crate::{
    config::AppConfig,
    get_param_or_num,
    pager::{query::PAGE_KEY, Pager, PagerRequest, Paginator},
    render::{document::document, listing::render_listing},
    util::query_params,
};

pub fn items(
    paginator: &Paginator,
    config: &AppConfig,
    request: &rouille::Request,
) -> rouille::Response {
    let page_key = paginator.config().page_key().unwrap_or(PAGE_KEY);
    let page = get_param_or_num!(request, page_key, 1);
    let limit = get_param_or_num!(request, "per", config.listing.limit);

    let mut params = query_params(request.raw_query_string());
    params.remove(page_key);

    let mut pager = PagerRequest::new(config.rows)
        .limit(limit)
        .page(page)
        .range(config.listing.range)
        .params(params);
    if let Some(hash) = &config.listing.hash {
        pager = pager.hash(hash.as_str());
    }

    let state = match paginator.pager(&pager) {
        Pager::Ready(state) => state,
        Pager::Redirect(redirect) => {
            return rouille::Response::redirect_302(redirect.location().to_owned())
        }
    };

    let nav = paginator
        .nav(&state)
        .render(&config.listing.class, config.listing.fixed_first_and_last);

    let document = document(
        "Items",
        html! {
            h1 { "Items" }
            (render_listing(&state, u64::try_from(config.rows).unwrap_or(0)))
            @if let Some(nav) = nav {
                (nav)
            }
        },
        None,
    );

    rouille::Response::html(document.into_string())
}
