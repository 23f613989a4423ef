//! Turn parsed shorthand into Alfred items

use tracing::debug;

use crate::alfred::Item;
use crate::config::Config;
use crate::options::ParserOptions;
use crate::result::ParseResult;

pub const GITHUB_URL: &str = "https://github.com";

/// Options used for the script filter: everything but a required repo
pub fn item_options() -> ParserOptions {
    ParserOptions::default()
        .with_repo()
        .with_user()
        .with_issue()
        .with_path()
        .with_query()
}

/// Parse `input` against `config` and build the matching items
pub fn generate_items(config: &Config, input: &str) -> Vec<Item> {
    let result = config.parser(item_options()).parse(input);
    debug!(?result, "parsed input");
    items_for(&result)
}

/// Items for an already parsed result. An empty result has none.
pub fn items_for(result: &ParseResult) -> Vec<Item> {
    let mut items = Vec::new();

    if let Some(repo) = result.repository.as_deref() {
        items.push(open_repo_item(repo, result));
        if let Some(query) = result.query.as_deref() {
            let url = format!(
                "{}/{}/search?type=Issues&q={}",
                GITHUB_URL,
                repo,
                urlencoding::encode(query)
            );
            items.push(
                Item::action(
                    format!("ghs:{}", repo),
                    format!("Search issues in {} for {}", repo, query),
                    format!("open {}", url),
                )
                .subtitle(url),
            );
        }
    } else if let Some(user) = result.user.as_deref() {
        let url = format!("{}/{}", GITHUB_URL, user);
        let title = format!(
            "Open {}{} on GitHub",
            user,
            shorthand_suffix(result.user_shorthand.as_deref())
        );
        items.push(
            Item::action(format!("gh:{}", user), title, format!("open {}", url)).subtitle(url),
        );

        if let Some(query) = result.query.as_deref() {
            items.push(search_item(&format!("user:{} {}", user, query), query));
        }
    } else if let Some(query) = result.query.as_deref() {
        items.push(search_item(query, query));
    }

    items
}

fn open_repo_item(repo: &str, result: &ParseResult) -> Item {
    let mut uid = format!("gh:{}", repo);
    let mut title = format!("Open {}", repo);
    let mut url = format!("{}/{}", GITHUB_URL, repo);

    if let Some(issue) = result.issue.as_deref() {
        uid.push_str(&format!("#{}", issue));
        title.push_str(&format!("#{}", issue));
        url.push_str(&format!("/issues/{}", issue));
    } else if let Some(path) = result.path.as_deref() {
        uid.push_str(path);
        title.push_str(path);
        url.push_str(path);
    }

    let shorthand = result
        .repo_shorthand
        .as_deref()
        .or(result.user_shorthand.as_deref());
    title.push_str(&shorthand_suffix(shorthand));
    title.push_str(" on GitHub");

    Item::action(uid, title, format!("open {}", url)).subtitle(url)
}

fn search_item(terms: &str, query: &str) -> Item {
    let url = format!("{}/search?q={}", GITHUB_URL, urlencoding::encode(terms));
    Item::action(
        format!("ghs:{}", terms),
        format!("Search GitHub for {}", query),
        format!("open {}", url),
    )
    .subtitle(url)
}

fn shorthand_suffix(shorthand: Option<&str>) -> String {
    shorthand.map(|s| format!(" ({})", s)).unwrap_or_default()
}
