/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Requests accepted by IoT Events operations
//!
//! Members bound to the URI path or query string are left out of the JSON body.

use crate::config::Config;
use crate::error::Error;
use crate::model::{
    DetectorModelDefinition, EvaluationMethod, InputDefinition, LoggingOptions, Tag,
};
use crate::protocol::{body, label, required, rest_operation};
use crate::{operation, output};
use http::Method;
use smithy_http::operation::{BuildError, Operation};
use smithy_http::query::Writer;
use smithy_http::response::ParseStrictResponse;
use smithy_types::shape;

/// An operation input that knows how to build its own request
pub trait OperationInput: Clone {
    type Output;
    type Handler: ParseStrictResponse<Output = Result<Self::Output, Error>>
        + Send
        + Sync
        + 'static;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError>;
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct CreateDetectorModelInput in create_detector_model_input {
        detector_model_name, set_detector_model_name: String;
        detector_model_definition, set_detector_model_definition: DetectorModelDefinition;
        detector_model_description, set_detector_model_description: String;
        key, set_key: String;
        role_arn, set_role_arn: String;
        tags, set_tags: Vec<Tag>;
        evaluation_method, set_evaluation_method: EvaluationMethod;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct CreateInputInput in create_input_input {
        input_name, set_input_name: String;
        input_description, set_input_description: String;
        input_definition, set_input_definition: InputDefinition;
        tags, set_tags: Vec<Tag>;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct DeleteDetectorModelInput in delete_detector_model_input {
        detector_model_name, set_detector_model_name: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct DeleteInputInput in delete_input_input {
        input_name, set_input_name: String;
    }
}

shape! {
    /// Describes one version of a detector model, or the latest when no version is given
    #[serde(rename_all = "camelCase")]
    pub struct DescribeDetectorModelInput in describe_detector_model_input {
        detector_model_name, set_detector_model_name: String;
        detector_model_version, set_detector_model_version: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct DescribeInputInput in describe_input_input {
        input_name, set_input_name: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct DescribeLoggingOptionsInput in describe_logging_options_input {}
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct ListDetectorModelVersionsInput in list_detector_model_versions_input {
        detector_model_name, set_detector_model_name: String;
        next_token, set_next_token: String;
        max_results, set_max_results: i32;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct ListDetectorModelsInput in list_detector_models_input {
        next_token, set_next_token: String;
        max_results, set_max_results: i32;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct ListInputsInput in list_inputs_input {
        next_token, set_next_token: String;
        max_results, set_max_results: i32;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct ListTagsForResourceInput in list_tags_for_resource_input {
        resource_arn, set_resource_arn: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct PutLoggingOptionsInput in put_logging_options_input {
        logging_options, set_logging_options: LoggingOptions;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct TagResourceInput in tag_resource_input {
        resource_arn, set_resource_arn: String;
        tags, set_tags: Vec<Tag>;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct UntagResourceInput in untag_resource_input {
        resource_arn, set_resource_arn: String;
        tag_keys, set_tag_keys: Vec<String>;
    }
}

shape! {
    /// Replaces the definition of a detector model, creating a new version
    #[serde(rename_all = "camelCase")]
    pub struct UpdateDetectorModelInput in update_detector_model_input {
        detector_model_name, set_detector_model_name: String;
        detector_model_definition, set_detector_model_definition: DetectorModelDefinition;
        detector_model_description, set_detector_model_description: String;
        role_arn, set_role_arn: String;
        evaluation_method, set_evaluation_method: EvaluationMethod;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct UpdateInputInput in update_input_input {
        input_name, set_input_name: String;
        input_description, set_input_description: String;
        input_definition, set_input_definition: InputDefinition;
    }
}

fn push_page_params(uri: &mut String, next_token: Option<&str>, max_results: Option<i32>) {
    let mut query = Writer::new(uri);
    if let Some(next_token) = next_token {
        query.push_kv("nextToken", next_token);
    }
    if let Some(max_results) = max_results {
        query.push_kv("maxResults", max_results);
    }
}

fn tags_uri(resource_arn: Option<&str>) -> Result<String, BuildError> {
    let mut uri = String::from("/tags");
    Writer::new(&mut uri).push_kv("resourceArn", required(resource_arn, "resource_arn")?);
    Ok(uri)
}

impl OperationInput for CreateDetectorModelInput {
    type Output = output::CreateDetectorModelOutput;
    type Handler = operation::CreateDetectorModel;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        rest_operation(
            Method::POST,
            "/detector-models".to_string(),
            Some(body(self, &[])?),
            "CreateDetectorModel",
            operation::CreateDetectorModel::new(),
            conf,
        )
    }
}

impl OperationInput for CreateInputInput {
    type Output = output::CreateInputOutput;
    type Handler = operation::CreateInput;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        rest_operation(
            Method::POST,
            "/inputs".to_string(),
            Some(body(self, &[])?),
            "CreateInput",
            operation::CreateInput::new(),
            conf,
        )
    }
}

impl OperationInput for DeleteDetectorModelInput {
    type Output = output::DeleteDetectorModelOutput;
    type Handler = operation::DeleteDetectorModel;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let name = label(self.detector_model_name.as_deref(), "detector_model_name")?;
        rest_operation(
            Method::DELETE,
            format!("/detector-models/{}", name),
            None,
            "DeleteDetectorModel",
            operation::DeleteDetectorModel::new(),
            conf,
        )
    }
}

impl OperationInput for DeleteInputInput {
    type Output = output::DeleteInputOutput;
    type Handler = operation::DeleteInput;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let name = label(self.input_name.as_deref(), "input_name")?;
        rest_operation(
            Method::DELETE,
            format!("/inputs/{}", name),
            None,
            "DeleteInput",
            operation::DeleteInput::new(),
            conf,
        )
    }
}

impl OperationInput for DescribeDetectorModelInput {
    type Output = output::DescribeDetectorModelOutput;
    type Handler = operation::DescribeDetectorModel;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let name = label(self.detector_model_name.as_deref(), "detector_model_name")?;
        let mut uri = format!("/detector-models/{}", name);
        if let Some(version) = &self.detector_model_version {
            Writer::new(&mut uri).push_kv("version", version);
        }
        rest_operation(
            Method::GET,
            uri,
            None,
            "DescribeDetectorModel",
            operation::DescribeDetectorModel::new(),
            conf,
        )
    }
}

impl OperationInput for DescribeInputInput {
    type Output = output::DescribeInputOutput;
    type Handler = operation::DescribeInput;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let name = label(self.input_name.as_deref(), "input_name")?;
        rest_operation(
            Method::GET,
            format!("/inputs/{}", name),
            None,
            "DescribeInput",
            operation::DescribeInput::new(),
            conf,
        )
    }
}

impl OperationInput for DescribeLoggingOptionsInput {
    type Output = output::DescribeLoggingOptionsOutput;
    type Handler = operation::DescribeLoggingOptions;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        rest_operation(
            Method::GET,
            "/logging".to_string(),
            None,
            "DescribeLoggingOptions",
            operation::DescribeLoggingOptions::new(),
            conf,
        )
    }
}

impl OperationInput for ListDetectorModelVersionsInput {
    type Output = output::ListDetectorModelVersionsOutput;
    type Handler = operation::ListDetectorModelVersions;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let name = label(self.detector_model_name.as_deref(), "detector_model_name")?;
        let mut uri = format!("/detector-models/{}/versions", name);
        push_page_params(&mut uri, self.next_token.as_deref(), self.max_results);
        rest_operation(
            Method::GET,
            uri,
            None,
            "ListDetectorModelVersions",
            operation::ListDetectorModelVersions::new(),
            conf,
        )
    }
}

impl OperationInput for ListDetectorModelsInput {
    type Output = output::ListDetectorModelsOutput;
    type Handler = operation::ListDetectorModels;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let mut uri = String::from("/detector-models");
        push_page_params(&mut uri, self.next_token.as_deref(), self.max_results);
        rest_operation(
            Method::GET,
            uri,
            None,
            "ListDetectorModels",
            operation::ListDetectorModels::new(),
            conf,
        )
    }
}

impl OperationInput for ListInputsInput {
    type Output = output::ListInputsOutput;
    type Handler = operation::ListInputs;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let mut uri = String::from("/inputs");
        push_page_params(&mut uri, self.next_token.as_deref(), self.max_results);
        rest_operation(
            Method::GET,
            uri,
            None,
            "ListInputs",
            operation::ListInputs::new(),
            conf,
        )
    }
}

impl OperationInput for ListTagsForResourceInput {
    type Output = output::ListTagsForResourceOutput;
    type Handler = operation::ListTagsForResource;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        rest_operation(
            Method::GET,
            tags_uri(self.resource_arn.as_deref())?,
            None,
            "ListTagsForResource",
            operation::ListTagsForResource::new(),
            conf,
        )
    }
}

impl OperationInput for PutLoggingOptionsInput {
    type Output = output::PutLoggingOptionsOutput;
    type Handler = operation::PutLoggingOptions;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        rest_operation(
            Method::PUT,
            "/logging".to_string(),
            Some(body(self, &[])?),
            "PutLoggingOptions",
            operation::PutLoggingOptions::new(),
            conf,
        )
    }
}

impl OperationInput for TagResourceInput {
    type Output = output::TagResourceOutput;
    type Handler = operation::TagResource;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        rest_operation(
            Method::POST,
            tags_uri(self.resource_arn.as_deref())?,
            Some(body(self, &["resourceArn"])?),
            "TagResource",
            operation::TagResource::new(),
            conf,
        )
    }
}

impl OperationInput for UntagResourceInput {
    type Output = output::UntagResourceOutput;
    type Handler = operation::UntagResource;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let mut uri = tags_uri(self.resource_arn.as_deref())?;
        let mut query = Writer::new(&mut uri);
        for key in self.tag_keys.iter().flatten() {
            query.push_kv("tagKeys", key);
        }
        rest_operation(
            Method::DELETE,
            uri,
            None,
            "UntagResource",
            operation::UntagResource::new(),
            conf,
        )
    }
}

impl OperationInput for UpdateDetectorModelInput {
    type Output = output::UpdateDetectorModelOutput;
    type Handler = operation::UpdateDetectorModel;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let name = label(self.detector_model_name.as_deref(), "detector_model_name")?;
        rest_operation(
            Method::POST,
            format!("/detector-models/{}", name),
            Some(body(self, &["detectorModelName"])?),
            "UpdateDetectorModel",
            operation::UpdateDetectorModel::new(),
            conf,
        )
    }
}

impl OperationInput for UpdateInputInput {
    type Output = output::UpdateInputOutput;
    type Handler = operation::UpdateInput;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let name = label(self.input_name.as_deref(), "input_name")?;
        rest_operation(
            Method::PUT,
            format!("/inputs/{}", name),
            Some(body(self, &["inputName"])?),
            "UpdateInput",
            operation::UpdateInput::new(),
            conf,
        )
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::input::{
        DescribeDetectorModelInput, DescribeLoggingOptionsInput, ListInputsInput,
        OperationInput, UntagResourceInput, UpdateInputInput,
    };
    use crate::model::{Attribute, InputDefinition};
    use aws_types::region::Region;
    use pretty_assertions::assert_eq;
    use smithy_http::operation::BuildError;

    fn conf() -> Config {
        Config::builder().region(Region::new("us-east-1")).build()
    }

    #[test]
    fn labels_and_version_are_bound_to_the_uri() {
        let op = DescribeDetectorModelInput::builder()
            .detector_model_name("motor model")
            .detector_model_version("2")
            .build()
            .make_operation(&conf())
            .expect("valid input");
        let request = op.request().http();
        assert_eq!(request.method(), http::Method::GET);
        assert_eq!(request.uri(), "/detector-models/motor%20model?version=2");
        assert!(request.headers().get("content-type").is_none());
    }

    #[test]
    fn bound_label_is_left_out_of_the_body() {
        let op = UpdateInputInput::builder()
            .input_name("pressureInput")
            .input_definition(
                InputDefinition::builder()
                    .attributes(vec![Attribute::builder().json_path("sensor.pressure").build()])
                    .build(),
            )
            .build()
            .make_operation(&conf())
            .expect("valid input");
        let request = op.request().http();
        assert_eq!(request.method(), http::Method::PUT);
        assert_eq!(request.uri(), "/inputs/pressureInput");
        assert_eq!(request.headers()["content-type"], "application/json");
        let body: serde_json::Value =
            serde_json::from_slice(request.body().bytes().expect("in memory")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"inputDefinition": {"attributes": [{"jsonPath": "sensor.pressure"}]}})
        );
    }

    #[test]
    fn empty_label_fails_before_sending() {
        let err = UpdateInputInput::builder()
            .input_name("")
            .build()
            .make_operation(&conf())
            .expect_err("empty label");
        assert!(matches!(err, BuildError::MissingField { field: "input_name", .. }));
    }

    #[test]
    fn paging_parameters_are_optional() {
        let unset = ListInputsInput::builder().build().make_operation(&conf()).unwrap();
        assert_eq!(unset.request().http().uri(), "/inputs");
        let set = ListInputsInput::builder()
            .max_results(10)
            .next_token("abc=")
            .build()
            .make_operation(&conf())
            .unwrap();
        assert_eq!(
            set.request().http().uri(),
            "/inputs?nextToken=abc%3D&maxResults=10"
        );
    }

    #[test]
    fn tag_keys_are_repeated() {
        let op = UntagResourceInput::builder()
            .resource_arn("arn:aws:iotevents:us-east-1:123456789012:input/pressureInput")
            .tag_keys(vec!["env".to_string(), "team".to_string()])
            .build()
            .make_operation(&conf())
            .unwrap();
        assert_eq!(op.request().http().method(), http::Method::DELETE);
        assert_eq!(
            op.request().http().uri(),
            "/tags?resourceArn=arn%3Aaws%3Aiotevents%3Aus-east-1%3A123456789012%3Ainput%2FpressureInput&tagKeys=env&tagKeys=team"
        );
    }

    #[test]
    fn empty_inputs_send_no_body() {
        let op = DescribeLoggingOptionsInput::builder()
            .build()
            .make_operation(&conf())
            .unwrap();
        assert_eq!(op.request().http().uri(), "/logging");
        assert_eq!(op.request().http().body().bytes(), Some(&b""[..]));
    }
}
