use crate::helpers::spawn_app;

#[actix_rt::test]
async fn home_page_returns_html_with_all_sections() {
    let app = spawn_app().await;

    let response = app.get_home().await;

    assert_eq!(200, response.status().as_u16());
    assert!(response
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let html = response.text().await.unwrap();
    for section in ["hero", "about", "projects", "skills", "contact"] {
        assert!(
            html.contains(&format!("<section id=\"{}\"", section)),
            "home page is missing the {} section",
            section
        );
    }
}

#[actix_rt::test]
async fn home_page_embeds_the_contact_form() {
    let app = spawn_app().await;

    let html = app.get_home().await.text().await.unwrap();

    assert!(html.contains("id=\"contact-form\""));
    assert!(html.contains("fetch('/api/contact'"));
}
