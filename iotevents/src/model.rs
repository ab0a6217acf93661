/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Detector model definitions, inputs, logging options and their enumerations

use smithy_types::{shape, wire_enum, Instant};

wire_enum! {
    pub enum DetectorModelVersionStatus {
        Active => "ACTIVE",
        Activating => "ACTIVATING",
        Inactive => "INACTIVE",
        Deprecated => "DEPRECATED",
        Draft => "DRAFT",
        Paused => "PAUSED",
        Failed => "FAILED",
    }
}

wire_enum! {
    /// Whether inputs are evaluated in batches or one at a time in arrival order
    pub enum EvaluationMethod {
        Batch => "BATCH",
        Serial => "SERIAL",
    }
}

wire_enum! {
    pub enum InputStatus {
        Creating => "CREATING",
        Updating => "UPDATING",
        Active => "ACTIVE",
        Deleting => "DELETING",
    }
}

wire_enum! {
    pub enum LoggingLevel {
        Error => "ERROR",
        Info => "INFO",
        Debug => "DEBUG",
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct Tag in tag {
        key, set_key: String;
        value, set_value: String;
    }
}

shape! {
    /// Sets a variable to a value given by an expression
    #[serde(rename_all = "camelCase")]
    pub struct SetVariableAction in set_variable_action {
        variable_name, set_variable_name: String;
        value, set_value: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct SnsTopicPublishAction in sns_topic_publish_action {
        target_arn, set_target_arn: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct IotTopicPublishAction in iot_topic_publish_action {
        mqtt_topic, set_mqtt_topic: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct SetTimerAction in set_timer_action {
        timer_name, set_timer_name: String;
        seconds, set_seconds: i32;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct ClearTimerAction in clear_timer_action {
        timer_name, set_timer_name: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct ResetTimerAction in reset_timer_action {
        timer_name, set_timer_name: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct LambdaAction in lambda_action {
        function_arn, set_function_arn: String;
    }
}

shape! {
    /// Sends the detector's data to another IoT Events input
    #[serde(rename_all = "camelCase")]
    pub struct IotEventsAction in iot_events_action {
        input_name, set_input_name: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct SqsAction in sqs_action {
        queue_url, set_queue_url: String;
        use_base64, set_use_base64: bool;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct FirehoseAction in firehose_action {
        delivery_stream_name, set_delivery_stream_name: String;
        separator, set_separator: String;
    }
}

shape! {
    /// An action taken when an event fires
    ///
    /// Exactly one member is expected to be set.
    #[serde(rename_all = "camelCase")]
    pub struct Action in action {
        set_variable, set_set_variable: SetVariableAction;
        sns, set_sns: SnsTopicPublishAction;
        iot_topic_publish, set_iot_topic_publish: IotTopicPublishAction;
        set_timer, set_set_timer: SetTimerAction;
        clear_timer, set_clear_timer: ClearTimerAction;
        reset_timer, set_reset_timer: ResetTimerAction;
        lambda, set_lambda: LambdaAction;
        iot_events, set_iot_events: IotEventsAction;
        sqs, set_sqs: SqsAction;
        firehose, set_firehose: FirehoseAction;
    }
}

shape! {
    /// Actions performed when `condition` evaluates to true
    #[serde(rename_all = "camelCase")]
    pub struct Event in event {
        event_name, set_event_name: String;
        condition, set_condition: String;
        actions, set_actions: Vec<Action>;
    }
}

shape! {
    /// Actions performed, and the state entered, when `condition` evaluates to true
    #[serde(rename_all = "camelCase")]
    pub struct TransitionEvent in transition_event {
        event_name, set_event_name: String;
        condition, set_condition: String;
        actions, set_actions: Vec<Action>;
        next_state, set_next_state: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct OnInputLifecycle in on_input_lifecycle {
        events, set_events: Vec<Event>;
        transition_events, set_transition_events: Vec<TransitionEvent>;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct OnEnterLifecycle in on_enter_lifecycle {
        events, set_events: Vec<Event>;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct OnExitLifecycle in on_exit_lifecycle {
        events, set_events: Vec<Event>;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct State in state {
        state_name, set_state_name: String;
        on_input, set_on_input: OnInputLifecycle;
        on_enter, set_on_enter: OnEnterLifecycle;
        on_exit, set_on_exit: OnExitLifecycle;
    }
}

shape! {
    /// The states of a detector model and the state every new detector starts in
    #[serde(rename_all = "camelCase")]
    pub struct DetectorModelDefinition in detector_model_definition {
        states, set_states: Vec<State>;
        initial_state_name, set_initial_state_name: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct DetectorModelConfiguration in detector_model_configuration {
        detector_model_name, set_detector_model_name: String;
        detector_model_version, set_detector_model_version: String;
        detector_model_description, set_detector_model_description: String;
        detector_model_arn, set_detector_model_arn: String;
        role_arn, set_role_arn: String;
        creation_time, set_creation_time: Instant;
        last_update_time, set_last_update_time: Instant;
        status, set_status: DetectorModelVersionStatus;
        key, set_key: String;
        evaluation_method, set_evaluation_method: EvaluationMethod;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct DetectorModel in detector_model {
        detector_model_definition, set_detector_model_definition: DetectorModelDefinition;
        detector_model_configuration, set_detector_model_configuration: DetectorModelConfiguration;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct DetectorModelSummary in detector_model_summary {
        detector_model_name, set_detector_model_name: String;
        detector_model_description, set_detector_model_description: String;
        creation_time, set_creation_time: Instant;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct DetectorModelVersionSummary in detector_model_version_summary {
        detector_model_name, set_detector_model_name: String;
        detector_model_version, set_detector_model_version: String;
        detector_model_arn, set_detector_model_arn: String;
        role_arn, set_role_arn: String;
        creation_time, set_creation_time: Instant;
        last_update_time, set_last_update_time: Instant;
        status, set_status: DetectorModelVersionStatus;
        evaluation_method, set_evaluation_method: EvaluationMethod;
    }
}

shape! {
    /// A JSON path into the input message, e.g. `temperature.value`
    #[serde(rename_all = "camelCase")]
    pub struct Attribute in attribute {
        json_path, set_json_path: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct InputDefinition in input_definition {
        attributes, set_attributes: Vec<Attribute>;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct InputConfiguration in input_configuration {
        input_name, set_input_name: String;
        input_description, set_input_description: String;
        input_arn, set_input_arn: String;
        creation_time, set_creation_time: Instant;
        last_update_time, set_last_update_time: Instant;
        status, set_status: InputStatus;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct Input in input {
        input_configuration, set_input_configuration: InputConfiguration;
        input_definition, set_input_definition: InputDefinition;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct InputSummary in input_summary {
        input_name, set_input_name: String;
        input_description, set_input_description: String;
        input_arn, set_input_arn: String;
        creation_time, set_creation_time: Instant;
        last_update_time, set_last_update_time: Instant;
        status, set_status: InputStatus;
    }
}

shape! {
    /// Restricts debug logging to one detector model, and optionally one detector
    #[serde(rename_all = "camelCase")]
    pub struct DetectorDebugOption in detector_debug_option {
        detector_model_name, set_detector_model_name: String;
        key_value, set_key_value: String;
    }
}

shape! {
    #[serde(rename_all = "camelCase")]
    pub struct LoggingOptions in logging_options {
        role_arn, set_role_arn: String;
        level, set_level: LoggingLevel;
        enabled, set_enabled: bool;
        detector_debug_options, set_detector_debug_options: Vec<DetectorDebugOption>;
    }
}
