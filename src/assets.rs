use bento_core::ImageKey;

pub(crate) const FALLBACK_GLYPH: &str = "\u{2726}";

pub(crate) fn image_src(key: ImageKey) -> &'static str {
    match key {
        ImageKey::Stars => "assets/images/stars.svg",
        ImageKey::SchedulePosts => "assets/images/illustration-schedule-posts.webp",
        ImageKey::Post => "assets/images/post.svg",
        ImageKey::ConsistentSchedule => "assets/images/illustration-consistent-schedule.webp",
        ImageKey::GrowFollowers => "assets/images/illustration-grow-followers.webp",
        ImageKey::AiContent => "assets/images/illustration-ai-content.webp",
        ImageKey::Audience => "assets/images/audience.svg",
        ImageKey::MultiplePlatforms => "assets/images/illustration-multiple-platforms.webp",
        ImageKey::Join => "assets/images/join.svg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_core::ALL_IMAGES;

    #[test]
    fn every_image_maps_to_its_file() {
        for key in ALL_IMAGES {
            let src = image_src(key);
            assert!(src.starts_with("assets/images/"), "{src}");
            assert!(src.ends_with(key.file_name()), "{src} for {key}");
        }
    }
}
