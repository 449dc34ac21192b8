// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::RemoteError;
use crate::models::{Bill, BillDraft, ReceiptUpload, UploadedReceipt};
use crate::store::{BillStore, StoreResult};
use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use serde::Deserialize;

/// Store talking to the Billed REST backend (`/bills`).
pub struct HttpStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedReceipt {
    file_url: String,
    key: String,
}

impl HttpStore {
    pub fn new(client: Client, base_url: &str, token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn bills_url(&self) -> String {
        format!("{}/bills", self.base_url)
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }
}

/// Turns a non-success status into `Erreur <code>`.
fn check(resp: Response) -> StoreResult<Response> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(RemoteError::from_status(status.as_u16()))
    }
}

impl BillStore for HttpStore {
    fn list(&self) -> StoreResult<Vec<Bill>> {
        let resp = self.authorized(self.client.get(self.bills_url())).send()?;
        Ok(check(resp)?.json()?)
    }

    fn create(&self, upload: ReceiptUpload<'_>) -> StoreResult<UploadedReceipt> {
        let part = multipart::Part::bytes(upload.file.bytes.clone())
            .file_name(upload.file.name.clone())
            .mime_str(&upload.file.mime)?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("email", upload.email.to_string());
        let resp = self
            .authorized(self.client.post(self.bills_url()))
            .multipart(form)
            .send()?;
        let created: CreatedReceipt = check(resp)?.json()?;
        Ok(UploadedReceipt {
            file_url: created.file_url,
            file_name: upload.file.name.clone(),
            key: created.key,
        })
    }

    fn update(&self, key: &str, draft: &BillDraft) -> StoreResult<Bill> {
        let url = format!("{}/{}", self.bills_url(), key);
        let resp = self.authorized(self.client.patch(url)).json(draft).send()?;
        Ok(check(resp)?.json()?)
    }
}
