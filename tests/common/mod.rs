pub mod mock_browser;
pub mod mock_services;

use aidesk::dispatcher::Dispatcher;
use aidesk::generative::TextGenerator;
use aidesk::translation::Translator;
use std::sync::Arc;

pub use mock_browser::MockBrowser;
pub use mock_services::{Heard, MockGenerator, MockRecognizer, MockTranslator};

/// A dispatcher wired entirely to mocks, with handles kept for verification
pub struct TestContext {
    pub dispatcher: Dispatcher,
    pub generator: Arc<MockGenerator>,
    pub translator: Arc<MockTranslator>,
    pub browser: Arc<MockBrowser>,
}

impl TestContext {
    pub fn new() -> Self {
        let generator = Arc::new(MockGenerator::new("42"));
        let translator = Arc::new(MockTranslator::new());
        let browser = Arc::new(MockBrowser::new());

        let dispatcher = Dispatcher::new(browser.clone())
            .with_generator(Some(generator.clone() as Arc<dyn TextGenerator>))
            .with_translator(Some(translator.clone() as Arc<dyn Translator>));

        Self {
            dispatcher,
            generator,
            translator,
            browser,
        }
    }
}
