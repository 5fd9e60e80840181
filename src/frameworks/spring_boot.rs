//! Spring Boot applications

use super::common::file_mentioning;
use super::java::BUILD_FILES;
use super::*;
use crate::detection::manifest::ManifestKind;
use crate::detection::types::Category;

const MAVEN_TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: spring-boot-app
runtime: java
build:
  command: ./mvnw -B package -DskipTests
  output: target
start:
  command: java -jar target/app.jar
port: 8080
";

const GRADLE_TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: spring-boot-app
runtime: java
build:
  command: ./gradlew bootJar
  output: build/libs
start:
  command: java -jar build/libs/app.jar
port: 8080
";

fn detect(evidence: &Evidence<'_>) -> CustomDetection {
    match file_mentioning(evidence, BUILD_FILES, &["org.springframework.boot"]) {
        Some(build) => CustomDetection::detected(
            85.0,
            vec![format!("{} applies org.springframework.boot", build)],
        ),
        None => CustomDetection::not_detected(),
    }
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
        FrameworkId::SpringBoot,
        Metadata::new("Spring Boot", Category::Java, "Spring Boot application"),
        Pattern::new()
            .dirs(&["src/main/java"])
            .requires("spring-boot-starter-web")
            .manifest(ManifestKind::Maven)
            .priority(5),
        Template::Select(select_template),
    )
    .with_detector(detect)
}
