use super::AttributeExtractor;
use crate::report_generation::domain::{AssetField, AssetFields, InstanceRecord};
use serde_json::Value;

/// Extractor for `aws_*` resources.
///
/// Every AWS asset gets `cloud_provider`, `id`, `region` and `tags`. EC2
/// instances, S3 buckets and RDS instances add class-specific fields; other
/// types use the raw resource type as `asset_type`.
pub struct AwsExtractor;

impl AwsExtractor {
    fn ec2_instance(instance: &InstanceRecord, fields: &mut AssetFields) {
        fields.insert("asset_type".into(), AssetField::text("EC2 Instance"));
        for key in ["instance_type", "ami", "public_ip", "private_ip"] {
            fields.insert(key.into(), AssetField::Text(instance.text_or_na(&[key])));
        }
    }

    fn s3_bucket(instance: &InstanceRecord, fields: &mut AssetFields) {
        let versioning = instance
            .block("versioning")
            .and_then(|block| block.get("enabled"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let encryption = instance
            .block("server_side_encryption_configuration")
            .cloned();

        fields.insert("asset_type".into(), AssetField::text("S3 Bucket"));
        fields.insert(
            "bucket_name".into(),
            AssetField::Text(instance.text_or_na(&["bucket"])),
        );
        fields.insert("versioning".into(), AssetField::Flag(versioning));
        fields.insert("encryption".into(), AssetField::Encryption(encryption));
    }

    fn rds_instance(instance: &InstanceRecord, fields: &mut AssetFields) {
        fields.insert("asset_type".into(), AssetField::text("RDS Database"));
        for key in ["engine", "engine_version", "instance_class"] {
            fields.insert(key.into(), AssetField::Text(instance.text_or_na(&[key])));
        }
        fields.insert(
            "storage_encrypted".into(),
            AssetField::Flag(instance.flag("storage_encrypted")),
        );
    }
}

impl AttributeExtractor for AwsExtractor {
    fn extract(&self, resource_type: &str, instance: &InstanceRecord) -> AssetFields {
        let mut fields = AssetFields::new();
        fields.insert("cloud_provider".into(), AssetField::text("AWS"));
        fields.insert("id".into(), AssetField::Text(instance.text_or_na(&["id", "arn"])));
        fields.insert(
            "region".into(),
            AssetField::Text(instance.text_or_na(&["region", "availability_zone"])),
        );
        fields.insert(
            "tags".into(),
            AssetField::Structured(instance.mapping("tags")),
        );

        match resource_type {
            "aws_instance" => Self::ec2_instance(instance, &mut fields),
            "aws_s3_bucket" => Self::s3_bucket(instance, &mut fields),
            "aws_db_instance" => Self::rds_instance(instance, &mut fields),
            other => {
                fields.insert("asset_type".into(), AssetField::text(other));
            }
        }

        fields
    }
}
