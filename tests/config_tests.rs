/// Layer configuration tests
///
/// Covers the config-based accessors and the typed non-convolution rejection

#[cfg(test)]
mod tests {
    use conv_shape::{
        height_width_from_config, num_feature_maps_from_config, ConvolutionLayer, Error,
        LayerConfig, NeuralNetConfiguration,
    };
    use pretty_assertions::assert_eq;

    fn conv_conf() -> NeuralNetConfiguration {
        ConvolutionLayer::new(3, 32)
            .with_kernel_size((3, 5))
            .with_stride((1, 1))
            .with_padding((1, 2))
            .into()
    }

    #[test]
    fn test_height_width_from_kernel_size() {
        // Kernel size is read like a shape: trailing entry first.
        assert_eq!(height_width_from_config(&conv_conf()).unwrap(), (5, 3));
    }

    #[test]
    fn test_num_feature_maps() {
        assert_eq!(num_feature_maps_from_config(&conv_conf()).unwrap(), 32);
    }

    #[test]
    fn test_non_convolution_layers_rejected() {
        let dense = NeuralNetConfiguration::new(LayerConfig::Dense { n_in: 10, n_out: 2 });
        let pool = NeuralNetConfiguration::new(LayerConfig::Subsampling {
            kernel_size: (2, 2),
            stride: (2, 2),
        });

        assert_eq!(
            height_width_from_config(&dense).unwrap_err(),
            Error::NotConvolutionLayer {
                layer: "dense".to_string()
            }
        );
        assert_eq!(
            num_feature_maps_from_config(&pool).unwrap_err(),
            Error::NotConvolutionLayer {
                layer: "subsampling".to_string()
            }
        );
    }

    #[test]
    fn test_layer_output_size_uses_own_settings() {
        let conf = conv_conf();
        let conv = conf.convolution_layer().unwrap();
        // h: (8 - 3 + 2) / 1 + 1, w: (8 - 5 + 4) / 1 + 1
        assert_eq!(conv.output_size(&[1, 3, 8, 8]).unwrap(), (8, 8));
    }

    #[test]
    fn test_layer_output_size_propagates_rejection() {
        let conv = ConvolutionLayer::new(1, 4).with_stride((2, 2));
        // Default 5x5 kernel on 8x8: (8 - 5) % 2 != 0
        assert!(matches!(
            conv.output_size(&[1, 1, 8, 8]),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_configuration_json_round_trip() {
        let conf = conv_conf();
        let json = serde_json::to_string(&conf).expect("serialize configuration");
        assert!(json.contains("\"type\":\"convolution\""));

        let back: NeuralNetConfiguration =
            serde_json::from_str(&json).expect("deserialize configuration");
        assert_eq!(back, conf);
        assert_eq!(back.layer().name(), "convolution");
    }
}
