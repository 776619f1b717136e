use crate::application::use_cases::VOUCHER_ALREADY_EXISTS;
use crate::ports::outbound::VoucherRepository;
use crate::shared::security::{validate_not_symlink, validate_regular_file, MAX_STORE_SIZE};
use crate::shared::{Result, VoucherError};
use crate::voucher::domain::{NewVoucher, Voucher, VoucherCode, VoucherId};
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::debug;

/// On-disk layout of the voucher store
#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    next_id: u64,
    vouchers: Vec<Voucher>,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            next_id: 1,
            vouchers: Vec::new(),
        }
    }
}

impl StoreDocument {
    fn find_by_code(&self, code: &VoucherCode) -> Option<&Voucher> {
        self.vouchers.iter().find(|v| v.code() == code)
    }

    fn allocate_id(&mut self) -> VoucherId {
        // Never hand out an id that is already taken, even if next_id was edited by hand
        let max_taken = self
            .vouchers
            .iter()
            .map(|v| v.id().value())
            .max()
            .unwrap_or(0);
        let id = self.next_id.max(max_taken + 1);
        self.next_id = id + 1;
        VoucherId::new(id)
    }
}

/// JsonFileVoucherRepository persists vouchers as a pretty-printed JSON file.
///
/// A missing file is an empty store. Each write replaces the file through a
/// temporary sibling so readers never see a half-written document. Writes
/// within one process are serialized; separate processes are not coordinated.
pub struct JsonFileVoucherRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileVoucherRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<StoreDocument> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || read_document(&path))
            .await
            .context("Voucher store read task failed")?
    }

    async fn save(&self, document: StoreDocument) -> Result<()> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_document(&path, &document))
            .await
            .context("Voucher store write task failed")?
    }
}

fn read_document(path: &Path) -> Result<StoreDocument> {
    if !path.exists() {
        debug!(path = %path.display(), "voucher store missing, starting empty");
        return Ok(StoreDocument::default());
    }

    validate_regular_file(path, "voucher store", MAX_STORE_SIZE)
        .map_err(|e| VoucherError::storage(path, e))?;

    let content = fs::read_to_string(path).map_err(|e| VoucherError::storage(path, e))?;
    if content.trim().is_empty() {
        return Ok(StoreDocument::default());
    }

    let document: StoreDocument = serde_json::from_str(&content)
        .map_err(|e| VoucherError::storage(path, format!("Invalid store contents: {}", e)))?;
    Ok(document)
}

fn write_document(path: &Path, document: &StoreDocument) -> Result<()> {
    if path.exists() {
        validate_not_symlink(path, "write").map_err(|e| VoucherError::storage(path, e))?;
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| VoucherError::storage(path, e))?;
    serde_json::to_writer_pretty(&mut file, document)
        .map_err(|e| VoucherError::storage(path, e))?;
    file.write_all(b"\n")
        .map_err(|e| VoucherError::storage(path, e))?;
    file.persist(path)
        .map_err(|e| VoucherError::storage(path, e.error))?;

    Ok(())
}

#[async_trait]
impl VoucherRepository for JsonFileVoucherRepository {
    async fn get_voucher_by_code(&self, code: &VoucherCode) -> Result<Option<Voucher>> {
        let _guard = self.lock.lock().await;
        let document = self.load().await?;
        Ok(document.find_by_code(code).cloned())
    }

    async fn create_voucher(&self, data: NewVoucher) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;

        if document.find_by_code(data.code()).is_some() {
            return Err(VoucherError::conflict(VOUCHER_ALREADY_EXISTS).into());
        }

        let id = document.allocate_id();
        document.vouchers.push(data.into_voucher(id));
        self.save(document).await
    }

    async fn use_voucher(&self, id: VoucherId) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;

        let voucher = document
            .vouchers
            .iter_mut()
            .find(|v| v.id() == id)
            .ok_or_else(|| VoucherError::storage(&self.path, format!("No voucher with id {}", id)))?;
        if !voucher.mark_used() {
            anyhow::bail!("Voucher {} has already been used", id);
        }

        self.save(document).await
    }
}
