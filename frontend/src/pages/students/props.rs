use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct StudentsProps {
    pub api: ApiClient,
}
