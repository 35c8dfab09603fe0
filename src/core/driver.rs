use crate::core::processor::ItemProcessor;
use crate::core::{ConfigProvider, ItemStore, Task};
use crate::utils::error::Result;
use std::io::{self, Stdout, Write};

/// Feeds the store's items, in order, to the processor.
pub struct Application<W: Write = Stdout> {
    store: ItemStore,
    processor: ItemProcessor,
    sink: W,
}

impl Application<Stdout> {
    pub fn new() -> Self {
        Self::with_sink(ItemStore::new(), io::stdout())
    }

    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_sink(ItemStore::from_items(items), io::stdout())
    }
}

impl Default for Application<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Application<W> {
    pub fn with_sink(store: ItemStore, sink: W) -> Self {
        Self {
            store,
            processor: ItemProcessor::new(),
            sink,
        }
    }

    /// Builds a driver from configuration. In strict mode every item is
    /// validated on the way in and the first empty one aborts construction.
    pub fn from_config<C: ConfigProvider>(config: &C, sink: W) -> Result<Self> {
        let mut app = Self::with_sink(ItemStore::new(), sink);
        for item in config.items() {
            if config.strict() {
                app.try_add_item(item.as_str())?;
            } else {
                app.add_item(item.as_str());
            }
        }
        tracing::debug!(
            "Loaded {} items (strict: {})",
            app.store.len(),
            config.strict()
        );
        Ok(app)
    }

    /// Processes every stored item once, in insertion order. Returns how many
    /// items were handed to the processor.
    pub fn process_items(&mut self) -> usize {
        tracing::info!("Processing {} items", self.store.len());

        let mut processed = 0;
        for item in self.store.iter() {
            self.processor.process(item, &mut self.sink);
            processed += 1;
        }

        if let Err(e) = self.sink.flush() {
            tracing::warn!("Failed to flush sink: {}", e);
        }

        tracing::info!("Processed {} items", processed);
        processed
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.store.add(item);
    }

    pub fn try_add_item(&mut self, item: impl Into<String>) -> Result<()> {
        self.store.try_add(item)
    }

    pub fn items(&self) -> Vec<String> {
        self.store.all_items()
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn version() -> &'static str {
        ItemStore::version()
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}

impl<W: Write> Task for Application<W> {
    fn run(&mut self) {
        self.process_items();
    }
}
