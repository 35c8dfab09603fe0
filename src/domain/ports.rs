/// A zero-argument unit of work an external scheduler can execute.
pub trait Task {
    fn run(&mut self);
}

pub trait ConfigProvider {
    fn items(&self) -> &[String];
    /// Whether items go through validation on the way into the store.
    fn strict(&self) -> bool;
}
