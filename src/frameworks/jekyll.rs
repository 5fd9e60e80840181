//! Jekyll static site generator

use super::*;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: jekyll-site
runtime: static
build:
  command: bundle install && bundle exec jekyll build
  output: _site
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Jekyll,
        Metadata::new("Jekyll", Category::Static, "Jekyll blog-aware static site generator"),
        Pattern::new()
            .files(&["_config.yml"])
            .dirs(&["_posts"])
            .content("Gemfile", &["jekyll"]),
        Template::fixed(TEMPLATE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::scoring::score;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_jekyll_blog() {
        let fs = MockFileSystem::new();
        fs.add_file("_config.yml", "title: blog");
        fs.add_file("_posts/2024-01-01-hello.md", "hello");
        fs.add_file("Gemfile", "gem \"jekyll\", \"~> 4.3\"");

        let result = score(&Evidence::new(&fs, fs.root()), &definition());
        assert_eq!(result.certainty, 100.0);
        assert_eq!(
            result.detected_items,
            vec!["_config.yml", "_posts/", "Gemfile contains 'jekyll'"]
        );
    }
}
