use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct CertificatesProps {
    pub api: ApiClient,
}
