use super::ArticleDraft;
use crate::feed::FeedEntry;
use crate::util::truncate_chars;

/// How much of the draft body is quoted in the image-prompt request.
pub const IMAGE_SUMMARY_CHARS: usize = 200;

/// Builds the rewrite request for one feed entry.
pub fn article_prompt(source: &FeedEntry, keywords: &[String]) -> String {
    format!(
        r#"Create a unique blog post based on this content:
Title: {title}
Source Content: {content}
Keywords to include: {keywords}

Respond with a JSON object with exactly these fields:
{{
    "title": "SEO optimized title with a number and a power word",
    "content": "Well-structured blog post (minimum 600 words) with the focus keyword in the first paragraph, multiple H2/H3 headings containing keywords, short paragraphs, internal and external links, and image placeholders with alt text",
    "meta_description": "SEO meta description containing the focus keyword",
    "keywords": "Comma-separated keywords used",
    "slug": "url-friendly-slug-with-focus-keyword"
}}

Requirements:
1. Minimum 600 words
2. Focus keyword in the title, meta description and content
3. Proper heading structure (H2, H3)
4. Both internal and external links
5. Image placeholders with keyword-optimized alt text"#,
        title = source.title,
        content = source.content,
        keywords = keywords.join(", "),
    )
}

/// Builds the request that asks for a header-image description.
pub fn image_prompt_request(draft: &ArticleDraft) -> String {
    format!(
        "Based on this blog post title and content, create a detailed image prompt for an image generation model:\n\
         Title: {}\n\
         Content summary: {}\n\n\
         Generate a creative and specific image description that would work well as a blog header image.",
        draft.title,
        truncate_chars(&draft.content, IMAGE_SUMMARY_CHARS),
    )
}
