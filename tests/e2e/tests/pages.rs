use e2e::browser::Browser;
use e2e::test_server::TestServer;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(10);

#[tokio::test]
#[ignore = "needs a built web client"]
async fn test_translation_files_are_served() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    for code in ["en", "fr"] {
        let response = reqwest::get(format!("{}/assets/i18n/{code}.json", server.url()))
            .await
            .expect("Failed to fetch translations");
        assert_eq!(response.status(), 200, "{code}.json should be served");
    }
}

#[tokio::test]
#[ignore = "needs Chrome and a built web client"]
async fn test_entry_page_redirects_to_a_locale() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(server.url()).expect("Failed to navigate");
    page.wait_until(
        "/\\/(en|fr)$/.test(window.location.pathname)",
        WAIT,
    )
    .expect("Entry page should redirect to /en or /fr");
}

#[tokio::test]
#[ignore = "needs Chrome and a built web client"]
async fn test_language_switch_persists_and_rewrites_url() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&format!("{}/en?lang=en", server.url()))
        .expect("Failed to navigate");
    page.wait_until("document.documentElement.lang === 'en'", WAIT)
        .expect("English should be applied");

    page.eval(
        "window.addEventListener('languageChanged', \
         e => window.__langs = [...(window.__langs || []), e.detail.lang]); true",
    )
    .expect("Failed to register event listener");

    page.click("#language-switcher [data-lang='fr']")
        .expect("French button should exist");
    page.wait_until("document.documentElement.lang === 'fr'", WAIT)
        .expect("French should be applied");
    page.wait_until("(window.__langs || []).includes('fr')", WAIT)
        .expect("languageChanged should fire with detail.lang = 'fr'");
    let events = page.eval("JSON.stringify(window.__langs)").expect("eval");
    assert_eq!(events, serde_json::json!("[\"fr\"]"));

    let stored = page
        .eval("localStorage.getItem('foody-language')")
        .expect("eval");
    assert_eq!(stored, serde_json::json!("fr"));

    let url = page.url().expect("url");
    assert!(url.contains("lang=fr"), "URL should carry the new locale: {url}");

    let placeholder = page
        .attribute("input[name='email']", "placeholder")
        .expect("email input");
    assert_eq!(placeholder.as_deref(), Some("vous@restaurant.fr"));

    let active = page
        .attribute("#language-switcher [data-lang='fr']", "aria-current")
        .expect("French button");
    assert_eq!(active.as_deref(), Some("true"));
}

#[tokio::test]
#[ignore = "needs Chrome and a built web client"]
async fn test_last_language_click_wins() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&format!("{}/en?lang=en", server.url()))
        .expect("Failed to navigate");
    page.wait_until("document.documentElement.lang === 'en'", WAIT)
        .expect("English should be applied");

    // Both clicks land before fr.json can arrive.
    page.eval(
        "document.querySelector(\"#language-switcher [data-lang='fr']\").click(); \
         document.querySelector(\"#language-switcher [data-lang='en']\").click(); true",
    )
    .expect("Failed to click switcher");

    tokio::time::sleep(Duration::from_secs(2)).await;
    let lang = page.eval("document.documentElement.lang").expect("eval");
    assert_eq!(lang, serde_json::json!("en"));
    let stored = page
        .eval("localStorage.getItem('foody-language')")
        .expect("eval");
    assert_eq!(stored, serde_json::json!("en"));
}

#[tokio::test]
#[ignore = "needs Chrome and a built web client"]
async fn test_theme_toggle_round_trips() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&format!("{}/en", server.url()))
        .expect("Failed to navigate");
    page.wait_until("!!document.documentElement.dataset.theme", WAIT)
        .expect("Theme should be applied");
    let initial = page
        .eval("document.documentElement.dataset.theme")
        .expect("eval");

    page.click(".theme-toggle").expect("toggle");
    page.wait_until(
        &format!("document.documentElement.dataset.theme !== {initial}"),
        WAIT,
    )
    .expect("Theme should flip");
    let stored = page.eval("localStorage.getItem('foody-theme')").expect("eval");
    assert_ne!(stored, initial);

    page.click(".theme-toggle").expect("toggle");
    page.wait_until(
        &format!("document.documentElement.dataset.theme === {initial}"),
        WAIT,
    )
    .expect("Theme should flip back");

    page.goto(&format!("{}/en", server.url()))
        .expect("Failed to reload");
    page.wait_until(
        &format!("document.documentElement.dataset.theme === {initial}"),
        WAIT,
    )
    .expect("Stored theme should survive a reload");
}
