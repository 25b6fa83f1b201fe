use crate::api::config::DEFAULT_STREAM_TEMPLATE;

/// Resolves a track id to a playable resource URL.
///
/// Kept as a seam so hosts can route through their own media servers; the
/// core never fetches anything itself.
pub trait StreamResolver {
    fn stream_url(&self, track_id: u64) -> String;
}

/// Stock resolver that formats ids into the public outer-URL endpoint.
#[derive(Debug, Default)]
pub struct OuterUrlResolver;

impl StreamResolver for OuterUrlResolver {
    fn stream_url(&self, track_id: u64) -> String {
        DEFAULT_STREAM_TEMPLATE.replace("{id}", &track_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_url_embeds_the_track_id() {
        let url = OuterUrlResolver.stream_url(347230);
        assert_eq!(
            url,
            "https://music.163.com/song/media/outer/url?id=347230.mp3"
        );
    }
}
