//! Generic JVM projects built with Maven or Gradle

use super::common::detect_any_file;
use super::*;
use crate::detection::types::Category;

pub(crate) const BUILD_FILES: &[&str] = &["pom.xml", "build.gradle", "build.gradle.kts"];

const MAVEN_TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: java-app
runtime: java
build:
  command: mvn -B package -DskipTests
  output: target
start:
  command: java -jar target/app.jar
port: 8080
";

const GRADLE_TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: java-app
runtime: java
build:
  command: ./gradlew build -x test
  output: build/libs
start:
  command: java -jar build/libs/app.jar
port: 8080
";

fn detect(evidence: &Evidence<'_>) -> CustomDetection {
    detect_any_file(evidence, BUILD_FILES, 40.0)
}

fn select_template(evidence: &Evidence<'_>) -> &'static str {
    if evidence.file_exists("pom.xml") {
        MAVEN_TEMPLATE
    } else {
        GRADLE_TEMPLATE
    }
}

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Java,
        Metadata::new("Java", Category::Java, "Java application"),
        Pattern::new().dirs(&["src/main/java"]),
        Template::Select(select_template),
    )
    .with_detector(detect)
}
