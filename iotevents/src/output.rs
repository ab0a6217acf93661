/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{
    DetectorModel, DetectorModelConfiguration, DetectorModelSummary, DetectorModelVersionSummary,
    Input, InputConfiguration, InputSummary, LoggingOptions, Tag,
};
use smithy_types::shape;

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct CreateDetectorModelOutput in create_detector_model_output {
        detector_model_configuration, set_detector_model_configuration: DetectorModelConfiguration;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct CreateInputOutput in create_input_output {
        input_configuration, set_input_configuration: InputConfiguration;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct DeleteDetectorModelOutput in delete_detector_model_output {}
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct DeleteInputOutput in delete_input_output {}
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct DescribeDetectorModelOutput in describe_detector_model_output {
        detector_model, set_detector_model: DetectorModel;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct DescribeInputOutput in describe_input_output {
        input, set_input: Input;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct DescribeLoggingOptionsOutput in describe_logging_options_output {
        logging_options, set_logging_options: LoggingOptions;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct ListDetectorModelVersionsOutput in list_detector_model_versions_output {
        detector_model_version_summaries, set_detector_model_version_summaries: Vec<DetectorModelVersionSummary>;
        next_token, set_next_token: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct ListDetectorModelsOutput in list_detector_models_output {
        detector_model_summaries, set_detector_model_summaries: Vec<DetectorModelSummary>;
        next_token, set_next_token: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct ListInputsOutput in list_inputs_output {
        input_summaries, set_input_summaries: Vec<InputSummary>;
        next_token, set_next_token: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct ListTagsForResourceOutput in list_tags_for_resource_output {
        tags, set_tags: Vec<Tag>;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct PutLoggingOptionsOutput in put_logging_options_output {}
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct TagResourceOutput in tag_resource_output {}
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct UntagResourceOutput in untag_resource_output {}
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct UpdateDetectorModelOutput in update_detector_model_output {
        detector_model_configuration, set_detector_model_configuration: DetectorModelConfiguration;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct UpdateInputOutput in update_input_output {
        input_configuration, set_input_configuration: InputConfiguration;
    }
}
