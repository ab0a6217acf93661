/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::input::*;
use crate::output::*;
use crate::paginator::Paginator;
use crate::Error;
use aws_hyper::BoxError;
use smithy_http::body::SdkBody;
use smithy_http::result::SdkError;
use std::sync::Arc;
use tower::Service;

#[derive(Debug)]
pub(crate) struct Handle<C> {
    client: aws_hyper::Client<C>,
    conf: Config,
}

/// Client for AWS IoT Events
///
/// Cloning a `Client` is cheap: clones share the same connector and configuration.
///
/// ```rust,no_run
/// use iotevents::input::DescribeInputInput;
/// use iotevents::{Client, Config, Region};
///
/// # async fn docs() -> Result<(), Box<dyn std::error::Error>> {
/// let conf = Config::builder().region(Region::new("us-east-1")).build();
/// let client = Client::from_conf(conf);
/// let described = client
///     .describe_input(DescribeInputInput::builder().input_name("pressureInput").build())
///     .await?;
/// println!("{:?}", described.input());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<C = aws_hyper::conn::Standard> {
    handle: Arc<Handle<C>>,
}

impl<C> Clone for Client<C> {
    fn clone(&self) -> Self {
        Client {
            handle: self.handle.clone(),
        }
    }
}

impl Client {
    /// Construct a client that sends requests over HTTPS
    pub fn from_conf(conf: Config) -> Self {
        Self::from_conf_conn(conf, aws_hyper::conn::Standard::https())
    }
}

impl<C> Client<C> {
    /// Construct a client that dispatches requests on `conn`
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        Client {
            handle: Arc::new(Handle {
                client: aws_hyper::Client::new(conn),
                conf,
            }),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }
}

macro_rules! operation_methods {
    ($( $(#[$doc:meta])* $method:ident($input:ident) -> $output:ident; )+) => {
        $(
            $(#[$doc])*
            pub async fn $method(&self, input: $input) -> Result<$output, SdkError<Error>> {
                self.send(input).await
            }
        )+
    };
}

macro_rules! paginator_methods {
    ($( $method:ident($input:ident); )+) => {
        $(
            pub fn $method(&self, input: $input) -> Paginator<C, $input> {
                Paginator::new(self.clone(), input)
            }
        )+
    };
}

impl<C> Client<C>
where
    C: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
        + Send
        + Clone
        + 'static,
    C::Error: Into<BoxError> + Send + Sync + 'static,
    C::Future: Send + 'static,
{
    /// Send any IoT Events input
    pub async fn send<I>(&self, input: I) -> Result<I::Output, SdkError<Error>>
    where
        I: OperationInput,
    {
        let op = input
            .make_operation(&self.handle.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.handle.client.call(op).await
    }

    operation_methods! {
        create_detector_model(CreateDetectorModelInput) -> CreateDetectorModelOutput;
        create_input(CreateInputInput) -> CreateInputOutput;
        /// Deletes a detector model. Detectors created from it are deleted as well.
        delete_detector_model(DeleteDetectorModelInput) -> DeleteDetectorModelOutput;
        delete_input(DeleteInputInput) -> DeleteInputOutput;
        /// Describes a detector model. Without a version the latest one is returned.
        describe_detector_model(DescribeDetectorModelInput) -> DescribeDetectorModelOutput;
        describe_input(DescribeInputInput) -> DescribeInputOutput;
        describe_logging_options(DescribeLoggingOptionsInput) -> DescribeLoggingOptionsOutput;
        list_detector_model_versions(ListDetectorModelVersionsInput) -> ListDetectorModelVersionsOutput;
        list_detector_models(ListDetectorModelsInput) -> ListDetectorModelsOutput;
        list_inputs(ListInputsInput) -> ListInputsOutput;
        list_tags_for_resource(ListTagsForResourceInput) -> ListTagsForResourceOutput;
        put_logging_options(PutLoggingOptionsInput) -> PutLoggingOptionsOutput;
        tag_resource(TagResourceInput) -> TagResourceOutput;
        untag_resource(UntagResourceInput) -> UntagResourceOutput;
        update_detector_model(UpdateDetectorModelInput) -> UpdateDetectorModelOutput;
        update_input(UpdateInputInput) -> UpdateInputOutput;
    }

    paginator_methods! {
        list_detector_model_versions_paginator(ListDetectorModelVersionsInput);
        list_detector_models_paginator(ListDetectorModelsInput);
        list_inputs_paginator(ListInputsInput);
    }
}
