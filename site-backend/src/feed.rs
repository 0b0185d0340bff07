//! RSS 2.0 feed synthesis for the blog.
//!
//! `render_feed` is a pure function over an already-fetched post list so the
//! document it produces is deterministic; `build_feed` wires it to the
//! store. The feed is rebuilt from scratch on every call, which also makes
//! it cheap to capture once during a static build pass.

use crate::models::Post;
use crate::store::{StoreClient, StoreError};

const CHANNEL_TITLE: &str = "Duncan Boyne - Blog";
const CHANNEL_DESCRIPTION: &str =
    "Insights, tutorials, and thoughts on Power BI, data visualization, and business intelligence.";
const CHANNEL_LANGUAGE: &str = "en-gb";

/// Escape user-supplied text for insertion into XML.
///
/// `&` must be replaced first so entities introduced by the later
/// replacements are not escaped again.
pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render the feed document from a post list.
///
/// Drafts (null `published_at`) are dropped even if the store returned them;
/// the order of the remaining posts is preserved as-is.
pub fn render_feed(posts: &[Post], site_url: &str) -> String {
    let items: String = posts
        .iter()
        .filter_map(|post| {
            let published_at = post.published_at?;
            let link = format!("{}/blog/{}", site_url, post.slug);
            let pub_date = published_at.format("%a, %d %b %Y %H:%M:%S GMT");
            Some(format!(
                "\n\t\t<item>\
                 \n\t\t\t<title>{title}</title>\
                 \n\t\t\t<link>{link}</link>\
                 \n\t\t\t<guid isPermaLink=\"true\">{link}</guid>\
                 \n\t\t\t<description>{description}</description>\
                 \n\t\t\t<pubDate>{pub_date}</pubDate>\
                 \n\t\t</item>",
                title = escape_xml(&post.title),
                description = escape_xml(post.excerpt.as_deref().unwrap_or("")),
            ))
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
	<channel>
		<title>{CHANNEL_TITLE}</title>
		<link>{site_url}/blog</link>
		<description>{CHANNEL_DESCRIPTION}</description>
		<language>{CHANNEL_LANGUAGE}</language>
		<atom:link href="{site_url}/rss.xml" rel="self" type="application/rss+xml" />
		{items}
	</channel>
</rss>"#
    )
}

/// Fetch every post and render the feed.
///
/// Store failures propagate unmodified; no error translation happens here.
pub async fn build_feed(store: &StoreClient, site_url: &str) -> Result<String, StoreError> {
    let posts = store.get_posts(None).await?;
    Ok(render_feed(&posts, site_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    const SITE_URL: &str = "https://www.duncanboyne.co.uk";

    fn post(slug: &str, title: &str, published_at: Option<DateTime<Utc>>) -> Post {
        let stamp = Utc.with_ymd_and_hms(2023, 12, 1, 9, 0, 0).unwrap();
        Post {
            id: 1,
            title: title.to_string(),
            slug: slug.to_string(),
            content: "body".to_string(),
            excerpt: None,
            published_at,
            featured_image: None,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[test]
    fn test_escape_covers_all_five_entities() {
        assert_eq!(
            escape_xml(r#"&<>"'"#),
            "&amp;&lt;&gt;&quot;&apos;"
        );
    }

    #[test]
    fn test_escape_does_not_double_escape() {
        // A lone ampersand becomes one entity; the entity's own characters
        // must not be escaped again by the later replacements.
        assert_eq!(escape_xml("fish & chips"), "fish &amp; chips");
        assert_eq!(escape_xml("a < b"), "a &lt; b");
    }

    #[test]
    fn test_drafts_are_excluded() {
        let published = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let posts = vec![
            post("a", "A & B", Some(published)),
            post("b", "Draft", None),
        ];

        let xml = render_feed(&posts, SITE_URL);

        assert_eq!(xml.matches("<item>").count(), 1);
        assert!(xml.contains("<title>A &amp; B</title>"));
        assert!(xml.contains("<link>https://www.duncanboyne.co.uk/blog/a</link>"));
        assert!(!xml.contains("Draft"));
        assert!(!xml.contains("/blog/b"));
    }

    #[test]
    fn test_item_order_follows_input_order() {
        let newer = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let older = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let posts = vec![
            post("second-post", "Second", Some(newer)),
            post("first-post", "First", Some(older)),
        ];

        let xml = render_feed(&posts, SITE_URL);

        let second = xml.find("/blog/second-post").unwrap();
        let first = xml.find("/blog/first-post").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_guid_is_the_permalink() {
        let published = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let xml = render_feed(&[post("a", "A", Some(published))], SITE_URL);

        assert!(xml.contains(
            "<guid isPermaLink=\"true\">https://www.duncanboyne.co.uk/blog/a</guid>"
        ));
    }

    #[test]
    fn test_pub_date_is_rfc1123_utc() {
        let published = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let xml = render_feed(&[post("a", "A", Some(published))], SITE_URL);

        assert!(xml.contains("<pubDate>Mon, 01 Jan 2024 00:00:00 GMT</pubDate>"));
    }

    #[test]
    fn test_null_excerpt_renders_empty_description() {
        let published = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let xml = render_feed(&[post("a", "A", Some(published))], SITE_URL);

        assert!(xml.contains("<description></description>"));
    }

    #[test]
    fn test_excerpt_is_escaped() {
        let published = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut p = post("a", "A", Some(published));
        p.excerpt = Some("Tips for <CALCULATE> & friends".to_string());

        let xml = render_feed(&[p], SITE_URL);

        assert!(xml.contains(
            "<description>Tips for &lt;CALCULATE&gt; &amp; friends</description>"
        ));
    }

    #[test]
    fn test_channel_metadata() {
        let xml = render_feed(&[], SITE_URL);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<title>Duncan Boyne - Blog</title>"));
        assert!(xml.contains("<link>https://www.duncanboyne.co.uk/blog</link>"));
        assert!(xml.contains("<language>en-gb</language>"));
        assert!(xml.contains(
            "<atom:link href=\"https://www.duncanboyne.co.uk/rss.xml\" rel=\"self\" type=\"application/rss+xml\" />"
        ));
        assert_eq!(xml.matches("<item>").count(), 0);
    }
}
