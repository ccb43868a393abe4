use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub use regex::{Regex, Error};


lazy_static! {
    static ref CACHE: RwLock<HashMap<String, Arc<Regex>>> =
        RwLock::new(HashMap::new());
}

pub fn compile<S: AsRef<str>>(pattern: S) -> Result<Arc<Regex>, Error> {
    let s = pattern.as_ref();
    if let Some(r) = CACHE.read().unwrap().get(s) {
        return Ok(r.clone());
    }
    let compiled = Arc::new(Regex::new(s)?);
    let mut cache = CACHE.write().unwrap();
    Ok(cache.entry(s.to_string()).or_insert(compiled).clone())
}
