use async_trait::async_trait;
use std::path::PathBuf;

/// Хранилище загруженных изображений
#[async_trait]
pub trait PreviewStorage: Send + Sync {
    /// Сохранить файл под ключом `key` и вернуть его публичный URL
    async fn put(&self, key: &str, data: &[u8]) -> std::io::Result<String>;
}

/// Файлы на локальном диске, раздаются через `ServeDir`
pub struct LocalPreviewStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalPreviewStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), key)
    }
}

#[async_trait]
impl PreviewStorage for LocalPreviewStorage {
    async fn put(&self, key: &str, data: &[u8]) -> std::io::Result<String> {
        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, data).await?;

        tracing::debug!("Stored {} bytes at {}", data.len(), path.display());
        Ok(self.public_url(key))
    }
}
