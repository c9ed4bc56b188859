use tokio::sync::Mutex;

use crate::error::RegistryError;
use crate::store::{LinkMap, LinkStore};

/// Outcome of a successful [`LinkRegistry::create_link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    /// The short code that was stored (requested or generated).
    pub code: String,
    /// Fully-qualified short URL, `<base_url>/<code>`.
    pub short_url: String,
}

/// The authoritative short_code → target_url registry.
///
/// The durable store is the single source of truth: every operation re-reads
/// it before answering, so an external edit to the file is visible on the
/// next request. Mutations run the whole load → uniqueness check → insert →
/// save sequence under one async mutex, so two concurrent creates can never
/// drop each other's entry via a last-save-wins overwrite.
pub struct LinkRegistry {
    store: LinkStore,
    base_url: String,
    write_lock: Mutex<()>,
}

impl LinkRegistry {
    pub fn new(store: LinkStore, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Resolve a short code to its target URL.
    pub async fn lookup(&self, code: &str) -> Result<String, RegistryError> {
        let links = self.store.load().await?;
        links
            .get(code)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(code.to_owned()))
    }

    /// The full current mapping.
    pub async fn list_all(&self) -> Result<LinkMap, RegistryError> {
        Ok(self.store.load().await?)
    }

    /// Register `url` under the requested code, or under a freshly generated
    /// one when no code is requested.
    ///
    /// A generated code that happens to collide is rejected exactly like a
    /// requested one — there is no silent regeneration.
    pub async fn create_link(
        &self,
        url: &str,
        requested_code: Option<&str>,
    ) -> Result<CreatedLink, RegistryError> {
        if url.is_empty() {
            return Err(RegistryError::MissingUrl);
        }

        let code = match requested_code.filter(|c| !c.is_empty()) {
            Some(code) => code.to_owned(),
            None => random_code(),
        };

        // Serialize the whole read-modify-write sequence: the store is one
        // shared file, and an unguarded interleaving would lose entries.
        let _guard = self.write_lock.lock().await;

        let mut links = self.store.load().await?;
        if links.contains_key(&code) {
            return Err(RegistryError::CodeExists(code));
        }

        links.insert(code.clone(), url.to_owned());
        self.store.save(&links).await?;

        tracing::info!("Created short link '{}' -> {}", code, url);

        Ok(CreatedLink {
            short_url: format!("{}/{}", self.base_url, code),
            code,
        })
    }
}

/// Generate a short code: 4 random bytes as 8 lowercase hex characters.
fn random_code() -> String {
    use rand::Rng;
    let bytes: [u8; 4] = rand::thread_rng().gen();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
