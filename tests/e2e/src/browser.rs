use anyhow::{Context, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder().headless(true).build()?;
        let browser = ChromeBrowser::new(options)?;
        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let element = self.tab.wait_for_element(selector)?;
        Ok(element.get_attribute_value(name)?)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }

    /// Evaluate a JS expression and return its JSON value.
    pub fn eval(&self, js: &str) -> Result<Value> {
        let result = self.tab.evaluate(js, false)?;
        Ok(result.value.unwrap_or(Value::Null))
    }

    /// Poll `js` until it evaluates to `true`.
    pub fn wait_until(&self, js: &str, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.eval(js)? == Value::Bool(true) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(anyhow::anyhow!("condition never held: {js}"))
                    .context("wait_until timed out");
            }
            std::thread::sleep(Duration::from_millis(100));
        }
    }
}
