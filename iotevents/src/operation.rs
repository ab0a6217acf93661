/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response handlers, one per IoT Events operation

use crate::output;
use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;

macro_rules! operations {
    ($( $(#[$doc:meta])* $name:ident => $output:ty; )+) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Debug, Default)]
            pub struct $name {
                _private: (),
            }

            impl $name {
                pub fn new() -> Self {
                    Self { _private: () }
                }
            }

            impl ParseStrictResponse for $name {
                type Output = Result<$output, crate::error::Error>;

                fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
                    crate::protocol::parse_response(response)
                }
            }
        )+
    };
}

operations! {
    /// Creates a detector model from a definition of states, events and actions
    CreateDetectorModel => output::CreateDetectorModelOutput;
    CreateInput => output::CreateInputOutput;
    /// Deletes a detector model along with any detectors it created
    DeleteDetectorModel => output::DeleteDetectorModelOutput;
    DeleteInput => output::DeleteInputOutput;
    DescribeDetectorModel => output::DescribeDetectorModelOutput;
    DescribeInput => output::DescribeInputOutput;
    DescribeLoggingOptions => output::DescribeLoggingOptionsOutput;
    ListDetectorModelVersions => output::ListDetectorModelVersionsOutput;
    ListDetectorModels => output::ListDetectorModelsOutput;
    ListInputs => output::ListInputsOutput;
    ListTagsForResource => output::ListTagsForResourceOutput;
    /// Sets or replaces the account's logging options
    PutLoggingOptions => output::PutLoggingOptionsOutput;
    TagResource => output::TagResourceOutput;
    UntagResource => output::UntagResourceOutput;
    /// Updates a detector model, creating a new version. Running detectors are reset.
    UpdateDetectorModel => output::UpdateDetectorModelOutput;
    UpdateInput => output::UpdateInputOutput;
}

#[cfg(test)]
mod test {
    use crate::model::{DetectorModelVersionStatus, EvaluationMethod};
    use crate::operation::{DeleteInput, DescribeDetectorModel};
    use bytes::Bytes;
    use smithy_http::response::ParseStrictResponse;

    #[test]
    fn nested_outputs_are_parsed() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"{
                    "detectorModel": {
                        "detectorModelDefinition": {"initialStateName": "Normal", "states": [{"stateName": "Normal"}]},
                        "detectorModelConfiguration": {
                            "detectorModelName": "motorDetectorModel",
                            "detectorModelVersion": "1",
                            "status": "ACTIVE",
                            "evaluationMethod": "BATCH",
                            "creationTime": 1.561e9
                        }
                    }
                }"#,
            ))
            .unwrap();
        let output = DescribeDetectorModel::new()
            .parse(&response)
            .expect("valid response");
        let model = output.detector_model().expect("model is set");
        let configuration = model
            .detector_model_configuration()
            .expect("configuration is set");
        assert_eq!(configuration.detector_model_version(), Some("1"));
        assert_eq!(
            configuration.status(),
            Some(&DetectorModelVersionStatus::Active)
        );
        assert_eq!(
            configuration.evaluation_method(),
            Some(&EvaluationMethod::Batch)
        );
        assert_eq!(
            model
                .detector_model_definition()
                .and_then(|definition| definition.initial_state_name()),
            Some("Normal")
        );
    }

    #[test]
    fn empty_bodies_parse() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::new())
            .unwrap();
        assert!(DeleteInput::new().parse(&response).is_ok());
    }
}
